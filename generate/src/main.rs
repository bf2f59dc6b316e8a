use anyhow::{Context, Result, bail};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

const STATIONS: &[(&str, f64)] = &[
    ("Abha", 18.0),
    ("Accra", 26.4),
    ("Amsterdam", 10.2),
    ("Athens", 19.2),
    ("Baghdad", 22.8),
    ("Bangkok", 28.6),
    ("Bergen", 7.7),
    ("Bogota", 14.0),
    ("Brussels", 10.5),
    ("Cairo", 21.4),
    ("Cape Town", 16.2),
    ("Dakar", 24.0),
    ("Darwin", 27.6),
    ("Denver", 10.4),
    ("Dhaka", 25.9),
    ("Dublin", 9.8),
    ("Hanoi", 23.6),
    ("Harare", 18.4),
    ("Helsinki", 5.9),
    ("Istanbul", 13.9),
    ("Jakarta", 26.7),
    ("Kyiv", 8.4),
    ("La Paz", 8.9),
    ("Lagos", 26.8),
    ("Lima", 19.2),
    ("Lisbon", 17.5),
    ("Montreal", 6.8),
    ("Nairobi", 17.8),
    ("Oslo", 5.7),
    ("Ottawa", 6.6),
    ("Paris", 12.3),
    ("Perth", 18.7),
    ("Prague", 8.4),
    ("Reykjavik", 4.3),
    ("Riga", 6.2),
    ("Rome", 15.2),
    ("Seoul", 12.5),
    ("Tokyo", 15.4),
    ("Wellington", 12.9),
    ("Zurich", 9.3),
];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let rows: u64 = args
        .next()
        .unwrap_or_else(|| "1000000".to_string())
        .parse()
        .context("row count must be an integer")?;
    let path = args.next().unwrap_or_else(|| "measurements.txt".to_string());
    if args.next().is_some() {
        bail!("Usage: generate [rows] [path]");
    }

    let file = File::create(&path).with_context(|| format!("creating {path}"))?;
    let mut out = BufWriter::new(file);
    let mut rng = rand::rng();

    let dists: Vec<(&str, Normal<f64>)> = STATIONS
        .iter()
        .map(|&(name, mean)| Normal::new(mean, 10.0).map(|d| (name, d)))
        .collect::<Result<_, _>>()
        .context("building value distributions")?;

    for _ in 0..rows {
        let (name, dist) = dists[rng.random_range(0..dists.len())];
        let value = dist.sample(&mut rng);
        writeln!(out, "{name};{value:.1}")?;
    }
    out.flush()?;

    Ok(())
}
