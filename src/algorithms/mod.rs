#[macro_use] mod alg_macros;
pub mod min_cost;
pub mod wait_time;
pub mod dijkstra_matrix;
pub mod td_matrix;
pub mod td_heap;

use td_matrix::TDMatrixScan;
use td_heap::TDMatrixHeap;

use crate::{benchable::Benchable, types::Schedule};

/// Retreives a list of initializers for benchables
pub fn algorithms() -> &'static [for<'a> fn(&'a Schedule) -> Box<dyn Benchable<'a> + 'a>] {
    &[
        |s| Box::new(TDMatrixScan::new(s)) as Box<dyn Benchable>,
        |s| Box::new(TDMatrixHeap::new(s)) as Box<dyn Benchable>
    ]
}

/// Router selected on the command line, `scan` or `heap`.
pub fn algorithm<'a>(key: &str, schedule: &'a Schedule) -> Option<Box<dyn Benchable<'a> + 'a>> {
    match key {
        "scan" => Some(Box::new(TDMatrixScan::new(schedule)) as Box<dyn Benchable>),
        "heap" => Some(Box::new(TDMatrixHeap::new(schedule)) as Box<dyn Benchable>),
        _ => None
    }
}
