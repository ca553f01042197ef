//! Dataset builders shared by the integration tests.

#![allow(dead_code)]

use county_core::{
    config::RunConfig,
    engine::QueryEngine,
    loader::{load_from_reader, LoadReport},
    store::RecordStore,
};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

pub const HEADER: &str = "County,State,Education.Bachelor's Degree or Higher,\
Education.High School or Higher,\
Ethnicities.American Indian and Alaska Native Alone,Ethnicities.Asian Alone,\
Ethnicities.Black Alone,Ethnicities.Hispanic or Latino,\
Ethnicities.Native Hawaiian and Other Pacific Islander Alone,\
Ethnicities.Two or More Races,Ethnicities.White Alone,\
Ethnicities.White Alone not Hispanic or Latino,\
Income.Median Household Income,Income.Per Capita Income,\
Income.Persons Below Poverty Level,Population.2014 Population";

/// One data row, in `HEADER` column order.
#[derive(Debug, Clone)]
pub struct Row {
    pub county:        String,
    pub state:         String,
    pub edu_bachelors: f64,
    pub edu_hs:        f64,
    pub ethnicity:     [f64; 8],
    pub income_median: i32,
    pub income_percap: i32,
    pub poverty:       f64,
    pub pop:           i32,
}

impl Row {
    pub fn new(county: &str, state: &str, pop: i32) -> Self {
        Self {
            county:        county.into(),
            state:         state.into(),
            edu_bachelors: 20.0,
            edu_hs:        85.0,
            ethnicity:     [1.0, 2.0, 10.0, 5.0, 0.5, 2.5, 80.0, 75.0],
            income_median: 50_000,
            income_percap: 25_000,
            poverty:       12.0,
            pop,
        }
    }

    pub fn edu_hs(mut self, v: f64) -> Self {
        self.edu_hs = v;
        self
    }

    pub fn poverty(mut self, v: f64) -> Self {
        self.poverty = v;
        self
    }

    pub fn income_median(mut self, v: i32) -> Self {
        self.income_median = v;
        self
    }

    pub fn to_line(&self) -> String {
        let eth: Vec<String> = self.ethnicity.iter().map(|v| v.to_string()).collect();
        format!(
            "{},{},{},{},{},{},{},{},{}",
            self.county,
            self.state,
            self.edu_bachelors,
            self.edu_hs,
            eth.join(","),
            self.income_median,
            self.income_percap,
            self.poverty,
            self.pop
        )
    }
}

pub fn csv(rows: &[Row]) -> String {
    let mut text = String::from(HEADER);
    text.push('\n');
    for row in rows {
        text.push_str(&row.to_line());
        text.push('\n');
    }
    text
}

pub fn load(text: &str) -> LoadReport {
    load_from_reader(text.as_bytes(), &RunConfig::default()).expect("dataset loads")
}

pub fn engine(rows: &[Row]) -> QueryEngine {
    let report = load(&csv(rows));
    QueryEngine::new(RecordStore::new(report.records), RunConfig::default())
}

/// Run an operations script, returning (stdout, stderr).
pub fn run(engine: &mut QueryEngine, script: &str) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    engine
        .run_script(script.as_bytes(), &mut out, &mut err)
        .expect("script runs");
    (
        String::from_utf8(out).expect("utf8 stdout"),
        String::from_utf8(err).expect("utf8 stderr"),
    )
}

/// A seeded random dataset of `n` valid rows spread over a few states.
pub fn synthetic_rows(seed: u64, n: usize) -> Vec<Row> {
    const STATES: [&str; 4] = ["CA", "TX", "NY", "WA"];
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let state = STATES[rng.gen_range(0..STATES.len())];
            let mut row = Row::new(&format!("County {i}"), state, rng.gen_range(100..2_000_000));
            row.edu_hs = f64::from(rng.gen_range(400..1000_i32)) / 10.0;
            row.edu_bachelors = f64::from(rng.gen_range(50..600_i32)) / 10.0;
            row.poverty = f64::from(rng.gen_range(0..400_i32)) / 10.0;
            row.income_median = rng.gen_range(20_000..120_000);
            row
        })
        .collect()
}
