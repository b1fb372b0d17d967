use crate::domain::model::{ContactRecord, LineTerminator, CONTACT_HEADERS};
use crate::utils::error::{EtlError, Result};
use csv::{Terminator, WriterBuilder};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default)]
pub struct ContactCsvWriter {
    terminator: LineTerminator,
}

impl ContactCsvWriter {
    pub fn new(terminator: LineTerminator) -> Self {
        Self { terminator }
    }

    /// 標題列一定會寫入，即使沒有任何記錄
    pub fn write_to<W: Write>(&self, records: &[ContactRecord], out: W) -> Result<W> {
        let terminator = match self.terminator {
            LineTerminator::Lf => Terminator::Any(b'\n'),
            LineTerminator::Crlf => Terminator::CRLF,
        };

        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .terminator(terminator)
            .from_writer(out);

        wtr.write_record(CONTACT_HEADERS)?;
        for record in records {
            wtr.serialize(record)?;
        }

        wtr.into_inner()
            .map_err(|e| EtlError::IoError(e.into_error()))
    }

    pub fn to_bytes(&self, records: &[ContactRecord]) -> Result<Vec<u8>> {
        self.write_to(records, Vec::new())
    }
}
