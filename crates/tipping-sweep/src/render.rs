//! Record sinks: where sweep results go.

use std::io::Write;

use crate::driver::SweepRecord;
use crate::Result;

/// Consumer of sweep records, called in sweep order.
pub trait RecordSink {
    /// Called once before the first record.
    fn begin(&mut self) -> Result<()> {
        Ok(())
    }

    fn record(&mut self, record: &SweepRecord) -> Result<()>;

    /// Called once after the last record, even for an empty sweep.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl RecordSink for Vec<SweepRecord> {
    fn record(&mut self, record: &SweepRecord) -> Result<()> {
        self.push(*record);
        Ok(())
    }
}

/// CSV with header `W,max_rest,percent_glory_sync,success_prob_async`.
pub struct CsvSink<W: Write> {
    out: W,
}

impl<W: Write> CsvSink<W> {
    pub const HEADER: &'static str = "W,max_rest,percent_glory_sync,success_prob_async";

    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn begin(&mut self) -> Result<()> {
        writeln!(self.out, "{}", Self::HEADER)?;
        Ok(())
    }

    fn record(&mut self, r: &SweepRecord) -> Result<()> {
        writeln!(
            self.out,
            "{},{},{},{}",
            r.hub_weight, r.max_rest, r.percent_glory_sync, r.success_prob_async
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// One JSON object per line.
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordSink for JsonLinesSink<W> {
    fn record(&mut self, record: &SweepRecord) -> Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(w: u32, sync: f64, successes: u32) -> SweepRecord {
        SweepRecord {
            hub_weight: w,
            max_rest: 3,
            percent_glory_sync: sync,
            success_prob_async: f64::from(successes) / 4.0,
            async_successes: successes,
            async_trials: 4,
        }
    }

    fn render<S: RecordSink>(sink: &mut S, records: &[SweepRecord]) {
        sink.begin().unwrap();
        for r in records {
            sink.record(r).unwrap();
        }
        sink.finish().unwrap();
    }

    #[test]
    fn csv_prints_header_and_rows() {
        let mut sink = CsvSink::new(Vec::new());
        render(&mut sink, &[record(2, 0.0, 0), record(3, 0.5, 2), record(4, 1.0, 4)]);
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            text,
            "W,max_rest,percent_glory_sync,success_prob_async\n\
             2,3,0,0\n\
             3,3,0.5,0.5\n\
             4,3,1,1\n"
        );
    }

    #[test]
    fn csv_header_survives_empty_sweep() {
        let mut sink = CsvSink::new(Vec::new());
        render(&mut sink, &[]);
        assert_eq!(
            String::from_utf8(sink.into_inner()).unwrap(),
            format!("{}\n", CsvSink::<Vec<u8>>::HEADER)
        );
    }

    #[test]
    fn json_lines_round_trip() {
        let records = [record(0, 0.25, 1), record(1, 0.75, 3)];
        let mut sink = JsonLinesSink::new(Vec::new());
        render(&mut sink, &records);
        let text = String::from_utf8(sink.into_inner()).unwrap();

        let parsed: Vec<SweepRecord> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(parsed, records);
        assert!(text.lines().next().unwrap().contains(r#""W":0"#));
    }
}
