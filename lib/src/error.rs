//! Custom Error and Result types for this library

use std::{any::Any, num::ParseIntError};
use thiserror::Error;

use crate::{
    probe::ping::PingProberBuilderError, prober::ParallelProberBuilderError,
};

/// Custom Error type for this library
#[derive(Error, Debug)]
pub enum MptsError {
    /// A subnet or skip octet that cannot be probed
    #[error("invalid subnet {target}: {error}")]
    InvalidSubnet {
        /// The offending input as provided by the caller
        target: String,
        /// Description of what is wrong with it
        error: String,
    },

    /// Generic thread error
    #[error("thread error: {_0}")]
    ThreadError(String),

    /// Error resulting from failure to build a parallel prober
    #[error("failed to build parallel prober: {_0}")]
    ParallelProberBuild(#[from] ParallelProberBuilderError),

    /// Error resulting from failure to build a ping prober
    #[error("failed to build ping prober: {_0}")]
    PingProberBuild(#[from] PingProberBuilderError),
}

impl From<Box<dyn Any + Send>> for MptsError {
    fn from(value: Box<dyn Any + Send>) -> Self {
        if let Some(s) = value.downcast_ref::<&'static str>() {
            Self::ThreadError(format!("Thread panicked with: {}", s))
        } else if let Some(s) = value.downcast_ref::<String>() {
            Self::ThreadError(format!("Thread panicked with: {}", s))
        } else {
            Self::ThreadError("Thread panicked with an unknown type".into())
        }
    }
}

impl MptsError {
    /// Builds an [`MptsError::InvalidSubnet`] from any displayable reason
    pub fn invalid_subnet(target: &str, error: impl ToString) -> Self {
        Self::InvalidSubnet {
            target: target.to_string(),
            error: error.to_string(),
        }
    }

    /// Converter for ipnet::AddrParseError
    pub fn from_ipnet_addr_parse_error(
        target: &str,
        error: ipnet::AddrParseError,
    ) -> Self {
        Self::invalid_subnet(target, error)
    }

    /// Converter for ParseIntError raised while parsing an octet
    pub fn from_octet_parse_int_err(octet: &str, error: ParseIntError) -> Self {
        Self::invalid_subnet(
            octet,
            format!("octet must be between 0 and 255 ({})", error),
        )
    }
}

/// Custom Result type for this library. All Errors exposed by this library
/// will be returned as [`MptsError`]
pub type Result<T> = std::result::Result<T, MptsError>;

#[cfg(test)]
#[path = "./error_tests.rs"]
mod tests;
