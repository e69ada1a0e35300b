#[cfg(test)]
#[path = "../../tests/unit/tsplib/writer_test.rs"]
mod writer_test;

use std::io::{BufWriter, Write};
use tsp_core::models::TourResult;
use tsp_core::utils::GenericError;

/// A trait to write tsplib95 tour.
pub trait TsplibSolution<W: Write> {
    /// Writes tsplib95 tour with given name.
    fn write_tsplib(&self, name: &str, writer: BufWriter<W>) -> Result<(), GenericError>;
}

impl<W: Write> TsplibSolution<W> for TourResult {
    fn write_tsplib(&self, name: &str, writer: BufWriter<W>) -> Result<(), GenericError> {
        if !self.is_solvable() {
            return Err("cannot write tour: no tour exists".into());
        }

        let mut writer = writer;
        let cities = self.tour().cities();
        // NOTE the closing return to the start city is implicit in the format
        let open_tour = &cities[..cities.len() - 1];

        writeln!(writer, "NAME : {name}")?;
        writeln!(writer, "TYPE : TOUR")?;
        writeln!(writer, "COMMENT : cost {}", self.cost())?;
        writeln!(writer, "DIMENSION : {}", open_tour.len())?;
        writeln!(writer, "TOUR_SECTION")?;
        for city in open_tour {
            writeln!(writer, "{}", city + 1)?;
        }
        writeln!(writer, "-1")?;
        writeln!(writer, "EOF")?;

        writer.flush()?;

        Ok(())
    }
}
