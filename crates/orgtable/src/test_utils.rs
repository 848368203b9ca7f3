use crate::model::Record;
use crate::source::memory::MemSource;
use crate::store::mem_backend::MemSnapshot;
use crate::store::RecordStore;

const ROUNDS: [&str; 3] = ["seed", "series a", "series b"];
const STAGES: [&str; 3] = ["early growth", "late growth", "mature"];

/// 45 records. 22 of them carry the "software" industry tag, and three of those (indexes
/// 4, 10 and 20) have an unparsable valuation. Every fifth record stores its valuation as
/// a range whose midpoint equals the scalar it would otherwise have.
pub fn sample_records() -> Vec<Record> {
    (0..45).map(sample_record).collect()
}

fn sample_record(i: usize) -> Record {
    let industries = if i == 44 {
        "logistics"
    } else if i % 2 == 0 {
        "software;ai"
    } else {
        "health care"
    };

    let millions = (i as u64 + 1) * 1_000_000;
    let valuation = match i {
        4 | 10 | 20 => "undisclosed".to_string(),
        _ if i % 5 == 3 => format!("{}-{}", millions - 500_000, millions + 500_000),
        _ => millions.to_string(),
    };

    let mut record = Record::new(format!("company {:02}", i))
        .with_industries(industries)
        .with_round(ROUNDS[i % 3])
        .with_amount(format!("{}-{}", i * 100, i * 100 + 200))
        .with_valuation(valuation)
        .with_growth_stage(STAGES[i % 3]);
    if i % 7 != 6 {
        record = record.with_launch_year(2000 + (i % 20) as i32);
    }
    record
}

/// A store backed by in-memory collaborators.
pub fn mem_store(records: Vec<Record>) -> RecordStore<MemSource, MemSnapshot> {
    RecordStore::new(MemSource::new(records), MemSnapshot::new())
}
