use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::path::Path;
use walkpoly::{GeomCfg, Polygon, Vec2};

/// Load a polygon from `.csv` (columns `x`, `y`) or `.json` (`[[x, y], ...]`).
pub fn load_polygon(path: &Path, cfg: GeomCfg) -> Result<Polygon> {
    let points = load_points(path)?;
    tracing::info!(path = %path.display(), vertices = points.len(), "polygon_loaded");
    Polygon::with_cfg(points, cfg).with_context(|| format!("building polygon from {}", path.display()))
}

pub fn load_points(path: &Path) -> Result<Vec<Vec2>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => load_csv(path),
        Some("json") => load_json(path),
        other => bail!(
            "unsupported input {} (extension {:?}); expected .csv or .json",
            path.display(),
            other
        ),
    }
}

fn load_csv(path: &Path) -> Result<Vec<Vec2>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()
        .with_context(|| format!("reading {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("selecting x,y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Vec2::new(x, y)),
            _ => bail!("{}: row {row} has a missing coordinate", path.display()),
        })
        .collect()
}

fn load_json(path: &Path) -> Result<Vec<Vec2>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let raw: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(raw.into_iter().map(|[x, y]| Vec2::new(x, y)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_json_points() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("square.json");
        fs::write(&path, "[[0, 0], [10, 0], [10, 10], [0, 10]]").unwrap();
        let poly = load_polygon(&path, GeomCfg::default()).unwrap();
        assert_eq!(poly.points().len(), 4);
        assert_eq!(poly.points()[2], Vec2::new(10.0, 10.0));
    }

    #[test]
    fn loads_csv_points() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tri.csv");
        fs::write(&path, "x,y\n0,0\n4.5,0\n0,3\n").unwrap();
        let pts = load_points(&path).unwrap();
        assert_eq!(
            pts,
            vec![Vec2::new(0.0, 0.0), Vec2::new(4.5, 0.0), Vec2::new(0.0, 3.0)]
        );
    }

    #[test]
    fn rejects_short_input_and_unknown_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("line.json");
        fs::write(&path, "[[0, 0], [1, 1]]").unwrap();
        let err = load_polygon(&path, GeomCfg::default()).unwrap_err();
        assert!(err
            .chain()
            .any(|e| e.to_string().contains("needs at least 3 points")));
        assert!(load_points(&dir.path().join("poly.txt")).is_err());
    }
}
