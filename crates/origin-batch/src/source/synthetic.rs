//! Synthetic records for load runs.
//!
//! Values are drawn from small fixed word pools so that runs seeded with the
//! same value produce identical records.

use crate::Submission;
use chrono::{Days, NaiveDate};
use origin_core::SubmissionRecord;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

const COMPANY_STEMS: &[&str] = &[
    "Acme", "Globex", "Initech", "Umbrella", "Stark", "Wayne", "Hooli", "Vandelay", "Soylent",
    "Tyrell", "Cyberdyne", "Gringotts",
];
const COMPANY_SUFFIXES: &[&str] = &["Ltd", "LLC", "Group", "Industries", "Exports", "and Sons"];
const CITIES: &[&str] = &[
    "Mumbai", "Chennai", "Kolkata", "Rotterdam", "Hamburg", "Singapore", "Dubai", "Shanghai",
    "Antwerp", "Busan", "Felixstowe", "Valencia",
];
const COUNTRIES: &[&str] = &[
    "India", "Germany", "Netherlands", "Singapore", "United Arab Emirates", "China", "Belgium",
    "South Korea", "United Kingdom", "Spain", "Kenya", "Brazil",
];
const FIRST_NAMES: &[&str] = &[
    "Aarav", "Meera", "Jonas", "Lena", "Wei", "Amina", "Diego", "Sofia", "Kenji", "Priya",
];
const LAST_NAMES: &[&str] = &[
    "Sharma", "Iyer", "Becker", "de Vries", "Tan", "Haddad", "Garcia", "Rossi", "Sato", "Okafor",
];
const WORDS: &[&str] = &[
    "cartons", "pallets", "drums", "bales", "crates", "road", "rail", "barge", "textiles",
    "spices", "machinery", "ceramics", "leather", "cotton", "steel", "tea",
];

/// Deterministic generator of complete, plausible records.
#[derive(Debug)]
pub struct SyntheticSource {
    rng: StdRng,
    today: NaiveDate,
}

impl SyntheticSource {
    pub fn seeded(seed: u64, today: NaiveDate) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            today,
        }
    }

    /// Seeds from the thread-local generator and dates from the local clock.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
            today: chrono::Local::now().date_naive(),
        }
    }

    pub fn record(&mut self) -> SubmissionRecord {
        SubmissionRecord {
            exporter: self.company(),
            consignee: self.company(),
            pre_carriage_by: capitalize(self.pick(WORDS)),
            place_of_receipt: self.pick(CITIES).to_string(),
            vessel_flight_no: format!("VF-{}", self.number(4)),
            port_of_loading: self.pick(CITIES).to_string(),
            lc_no: format!("LC-{}", self.number(6)),
            port_of_discharge: self.pick(CITIES).to_string(),
            final_destination: self.pick(CITIES).to_string(),
            bl_awb_no: format!("BL-{}", self.number(6)),
            marks_nosandcontainer_no: format!("PKG-{}", self.number(3)),
            num_and_kind_of_pkgs: self.pick(WORDS).to_string(),
            description_of_goods: self.sentence(),
            quantity: self.rng.random_range(1..=100).to_string(),
            destination: self.pick(COUNTRIES).to_string(),
            consignor: self.name(),
            invoice_number: format!("INV-{}", self.number(4)),
            manufacturer: self.company(),
            nationality: self.pick(COUNTRIES).to_string(),
            total_quantity: self.rng.random_range(100..=1000).to_string(),
            date: self.future_date().format("%Y-%m-%d").to_string(),
            exporter_signature: self.name(),
            certification_place: self.pick(CITIES).to_string(),
        }
    }

    /// Produces `count` submissions.
    pub fn take(&mut self, count: usize) -> Vec<Submission> {
        (0..count).map(|_| Submission::from(&self.record())).collect()
    }

    fn pick(&mut self, pool: &'static [&'static str]) -> &'static str {
        pool.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn company(&mut self) -> String {
        format!("{} {}", self.pick(COMPANY_STEMS), self.pick(COMPANY_SUFFIXES))
    }

    fn name(&mut self) -> String {
        format!("{} {}", self.pick(FIRST_NAMES), self.pick(LAST_NAMES))
    }

    fn sentence(&mut self) -> String {
        let len = self.rng.random_range(4..=8);
        let words: Vec<_> = (0..len).map(|_| self.pick(WORDS)).collect();
        format!("{}.", capitalize(&words.join(" ")))
    }

    /// A number of at most `digits` digits.
    fn number(&mut self, digits: u32) -> u64 {
        self.rng.random_range(0..10u64.pow(digits))
    }

    fn future_date(&mut self) -> NaiveDate {
        let ahead = self.rng.random_range(1..=30);
        self.today
            .checked_add_days(Days::new(ahead))
            .unwrap_or(self.today)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
