//! Contains functionality to read and write problems in a subset of TSPLIB95 format.

mod reader;
pub use self::reader::TsplibProblem;

mod writer;
pub use self::writer::TsplibSolution;
