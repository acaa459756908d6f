use numpy::ndarray::Array2;
use numpy::{PyArray2, PyReadonlyArray2};
use pyo3::prelude::*;
use pyo3::types::PyList;

use tpm::{State, V6C};

use crate::vec6::PyV6C;

/// How a batch of state vectors arrived from Python, so results go back in
/// the same form.
pub(crate) enum V6Batch {
    Single,
    List,
    Array,
}

/// Parse state vectors from Python: a single V6C, a list of V6C, or an Nx6
/// numpy array of `[x, y, z, xdot, ydot, zdot]` rows.
pub(crate) fn parse_v6(obj: &Bound<'_, PyAny>) -> PyResult<(Vec<V6C>, V6Batch)> {
    if let Ok(single) = obj.extract::<PyV6C>() {
        Ok((vec![single.inner], V6Batch::Single))
    } else if let Ok(list) = obj.cast::<PyList>() {
        let v6 = list
            .iter()
            .map(|item| {
                let v: PyV6C = item.extract().map_err(|_| {
                    pyo3::exceptions::PyTypeError::new_err("list items must be V6C objects")
                })?;
                Ok(v.inner)
            })
            .collect::<PyResult<Vec<V6C>>>()?;
        Ok((v6, V6Batch::List))
    } else if let Ok(arr) = obj.extract::<PyReadonlyArray2<f64>>() {
        let a = arr.as_array();
        if a.shape()[1] != 6 {
            return Err(pyo3::exceptions::PyValueError::new_err(format!(
                "state vector array must have 6 columns, got {}",
                a.shape()[1]
            )));
        }
        let v6 = a
            .rows()
            .into_iter()
            .map(|r| V6C::from([r[0], r[1], r[2], r[3], r[4], r[5]]))
            .collect();
        Ok((v6, V6Batch::Array))
    } else {
        Err(pyo3::exceptions::PyTypeError::new_err(
            "v6 must be a V6C, a list of V6C objects, or an Nx6 numpy array",
        ))
    }
}

/// Return converted state vectors in the form they were given.
pub(crate) fn v6_to_python<'py>(
    py: Python<'py>,
    v6: Vec<V6C>,
    batch: V6Batch,
) -> PyResult<Bound<'py, PyAny>> {
    match batch {
        V6Batch::Single => {
            let inner = v6.into_iter().next().unwrap_or_default();
            Ok(Bound::new(py, PyV6C { inner })?.into_any())
        }
        V6Batch::List => {
            let items = v6.into_iter().map(|inner| PyV6C { inner });
            Ok(PyList::new(py, items)?.into_any())
        }
        V6Batch::Array => {
            let n = v6.len();
            let flat: Vec<f64> = v6.iter().flat_map(|v| v.to_array()).collect();
            let arr = Array2::from_shape_vec((n, 6), flat)
                .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
            Ok(PyArray2::from_owned_array(py, arr).into_any())
        }
    }
}

/// Decode a TPM state number. Out-of-range codes such as -1 or 300 raise
/// ValueError like any other unknown code.
pub(crate) fn parse_state(code: i64) -> PyResult<State> {
    let code = u8::try_from(code).map_err(|_| {
        pyo3::exceptions::PyValueError::new_err(format!("Unknown coordinate state code {code}"))
    })?;
    State::try_from(code).map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}
