use thiserror::Error;

use crate::types::Vertex;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("{matrix} matrix is not square: {rows} rows, {cols} columns")]
    NotSquare { matrix: &'static str, rows: usize, cols: usize },
    #[error("{matrix} matrix has dimension {found}, expected {expected}")]
    DimensionMismatch { matrix: &'static str, expected: usize, found: usize },
    #[error("{matrix} matrix has negative value {value} at ({from}, {to})")]
    NegativeValue { matrix: &'static str, from: Vertex, to: Vertex, value: i64 },
    #[error("vertex {vertex} is out of range for a network of {size} stations")]
    VertexOutOfRange { vertex: Vertex, size: usize },
    #[error("no route from station {from} to station {to}")]
    NoRoute { from: Vertex, to: Vertex },
    #[error("invalid value for {key}: {value}")]
    Config { key: &'static str, value: String },
    #[error("invalid --{name} argument: {value}")]
    Argument { name: &'static str, value: String },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
