// Synthetic season data for trying the dashboard without a real file.

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::info;

use crate::table::TableError;

pub const SAMPLE_PLAYERS: [&str; 5] = [
    "Mike Trout",
    "Mookie Betts",
    "Juan Soto",
    "Aaron Judge",
    "Vladimir Guerrero Jr.",
];
pub const SAMPLE_SEASONS: [i32; 3] = [2021, 2022, 2023];

/// One generated player-season, in CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRow {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Season")]
    pub season: i32,
    #[serde(rename = "AVG")]
    pub avg: f64,
    #[serde(rename = "OBP")]
    pub obp: f64,
    #[serde(rename = "SLUG")]
    pub slug: f64,
    #[serde(rename = "OPS")]
    pub ops: f64,
    #[serde(rename = "BABIP")]
    pub babip: f64,
    #[serde(rename = "HR")]
    pub hr: u32,
    #[serde(rename = "2B")]
    pub doubles: u32,
    #[serde(rename = "3B")]
    pub triples: u32,
    #[serde(rename = "RBI")]
    pub rbi: u32,
    #[serde(rename = "SB")]
    pub sb: u32,
    #[serde(rename = "BB")]
    pub bb: u32,
    #[serde(rename = "SO")]
    pub so: u32,
}

/// Seeded generator for reproducible samples, entropy-seeded otherwise.
pub fn sample_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

fn rate<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    round3(rng.gen_range(lo..=hi))
}

/// Every sample player for every sample season.
///
/// Rates are drawn uniformly at three decimals and counts uniformly over
/// inclusive ranges. OPS is OBP + SLUG of the drawn values.
pub fn generate_sample<R: Rng>(rng: &mut R) -> Vec<SampleRow> {
    let mut rows = Vec::with_capacity(SAMPLE_PLAYERS.len() * SAMPLE_SEASONS.len());
    for player in SAMPLE_PLAYERS {
        for season in SAMPLE_SEASONS {
            let avg = rate(rng, 0.250, 0.350);
            let obp = rate(rng, 0.300, 0.450);
            let slug = rate(rng, 0.400, 0.650);
            let babip = rate(rng, 0.250, 0.400);
            rows.push(SampleRow {
                player: player.to_string(),
                season,
                avg,
                obp,
                slug,
                ops: round3(obp + slug),
                babip,
                hr: rng.gen_range(15..=50),
                doubles: rng.gen_range(20..=45),
                triples: rng.gen_range(0..=8),
                rbi: rng.gen_range(60..=130),
                sb: rng.gen_range(0..=25),
                bb: rng.gen_range(40..=120),
                so: rng.gen_range(80..=200),
            });
        }
    }
    rows
}

/// Write rows as CSV with a header, creating parent directories.
pub fn write_sample_csv(path: &Path, rows: &[SampleRow]) -> Result<(), TableError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| TableError::Io {
            path: parent.display().to_string(),
            source,
        })?;
    }

    let csv_err = |source| TableError::Csv {
        path: path.display().to_string(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    for row in rows {
        writer.serialize(row).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| TableError::Io {
        path: path.display().to_string(),
        source,
    })?;

    info!("Wrote {} sample rows to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::load_table;

    #[test]
    fn sample_covers_every_player_season() {
        let rows = generate_sample(&mut StdRng::seed_from_u64(7));
        assert_eq!(rows.len(), 15);
        assert_eq!(rows[0].player, "Mike Trout");
        assert_eq!(rows[0].season, 2021);
        assert_eq!(rows[14].player, "Vladimir Guerrero Jr.");
        assert_eq!(rows[14].season, 2023);
    }

    #[test]
    fn sample_values_stay_in_range() {
        for row in generate_sample(&mut StdRng::seed_from_u64(42)) {
            assert!((0.250..=0.350).contains(&row.avg));
            assert!((0.300..=0.450).contains(&row.obp));
            assert!((0.400..=0.650).contains(&row.slug));
            assert!((0.250..=0.400).contains(&row.babip));
            assert!((row.ops - (row.obp + row.slug)).abs() < 1e-9);
            assert!((15..=50).contains(&row.hr));
            assert!((20..=45).contains(&row.doubles));
            assert!(row.triples <= 8);
            assert!((60..=130).contains(&row.rbi));
            assert!(row.sb <= 25);
            assert!((40..=120).contains(&row.bb));
            assert!((80..=200).contains(&row.so));
            assert_eq!(round3(row.avg), row.avg);
        }
    }

    #[test]
    fn same_seed_same_sample() {
        let a = generate_sample(&mut sample_rng(Some(99)));
        let b = generate_sample(&mut sample_rng(Some(99)));
        assert_eq!(a, b);
        assert_ne!(a, generate_sample(&mut sample_rng(Some(100))));
    }

    #[test]
    fn written_sample_loads_back() {
        let dir = std::env::temp_dir().join(format!("statline_sample_{}", std::process::id()));
        let path = dir.join("nested").join("sample.csv");
        let rows = generate_sample(&mut StdRng::seed_from_u64(1));

        write_sample_csv(&path, &rows).unwrap();
        let table = load_table(&path).unwrap();

        assert_eq!(table.row_count(), 15);
        assert_eq!(
            table.column_names(),
            vec!["Player", "Season", "AVG", "OBP", "SLUG", "OPS", "BABIP", "HR", "2B", "3B", "RBI", "SB", "BB", "SO"]
        );
        assert_eq!(table.players().unwrap().len(), 5);
        assert_eq!(table.season_bounds(), Some((2021, 2023)));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
