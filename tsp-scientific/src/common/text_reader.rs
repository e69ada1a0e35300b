use std::io::prelude::*;
use std::io::{BufReader, Read};
use tsp_core::utils::{Float, GenericError};

/// Reads next line into the buffer, returns amount of bytes read (zero at the end of input).
pub(crate) fn read_line<R: Read>(reader: &mut BufReader<R>, buffer: &mut String) -> Result<usize, GenericError> {
    buffer.clear();
    reader.read_line(buffer).map_err(|err| err.to_string().into())
}

pub(crate) fn parse_float(data: &str, err_msg: &str) -> Result<Float, GenericError> {
    data.trim().parse::<Float>().map_err(|err| format!("{err_msg}: '{err}'").into())
}

pub(crate) fn parse_usize(data: &str, err_msg: &str) -> Result<usize, GenericError> {
    data.trim()
        .parse::<Float>()
        // NOTE some files have integral values written like 28.00000
        .map_err(|err| GenericError::from(format!("{err_msg}: '{err}'")))
        .and_then(|value| {
            if value >= 0. && value.fract() == 0. {
                Ok(value as usize)
            } else {
                Err(format!("{err_msg}: '{value}' is not a non-negative integer").into())
            }
        })
}
