use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::fmt::SubscriberBuilder;

use hullscan::algorithms::convex_hull;
use hullscan::data::Point;

/// Read a point set from a file and print its convex hull.
///
/// The file holds whitespace-separated numbers: a point count N followed
/// by N x/y coordinate pairs.
#[derive(Parser)]
#[command(name = "hull-cli")]
#[command(about = "Convex hull of a point set read from a file")]
struct Cmd {
  /// Input file; prompted for interactively when omitted.
  file: Option<PathBuf>,
}

fn main() -> Result<()> {
  SubscriberBuilder::default().with_target(false).init();
  let cmd = Cmd::parse();

  let path = match cmd.file {
    Some(path) => path,
    None => prompt_for_path()?,
  };
  let contents = fs::read_to_string(&path)
    .with_context(|| format!("Cannot open file: {}", path.display()))?;
  let points = parse_points(&contents)?;
  tracing::info!(file = %path.display(), points = points.len(), "point set loaded");

  let hull = convex_hull(points);
  tracing::debug!(vertices = hull.len(), "scan finished");
  println!("Convex hull points: {}", render_points(&hull));
  Ok(())
}

fn prompt_for_path() -> Result<PathBuf> {
  print!("Filepath not given, please enter filepath: ");
  std::io::stdout().flush()?;
  let mut line = String::new();
  std::io::stdin().read_line(&mut line)?;
  let trimmed = line.trim();
  if trimmed.is_empty() {
    bail!("no filepath given");
  }
  Ok(PathBuf::from(trimmed))
}

/// Parse `N x0 y0 x1 y1 ...`. Truncated or non-numeric input is an error
/// rather than a silent zero-fill.
fn parse_points(contents: &str) -> Result<Vec<Point<f64>>> {
  let mut tokens = contents.split_whitespace();
  let count: usize = match tokens.next() {
    Some(token) => token
      .parse()
      .with_context(|| format!("malformed input: bad point count {:?}", token))?,
    None => bail!("malformed input: empty file"),
  };
  let mut points = Vec::new();
  for idx in 0..count {
    let x = parse_coord(tokens.next(), idx, "x")?;
    let y = parse_coord(tokens.next(), idx, "y")?;
    points.push(Point::new([x, y]));
  }
  if tokens.next().is_some() {
    tracing::warn!("trailing data after the declared {} points", count);
  }
  Ok(points)
}

fn parse_coord(token: Option<&str>, idx: usize, axis: &str) -> Result<f64> {
  match token {
    Some(token) => token.parse().with_context(|| {
      format!(
        "malformed input: point {}: bad {} coordinate {:?}",
        idx, axis, token
      )
    }),
    None => bail!(
      "malformed input: file ends inside point {} ({} coordinate)",
      idx,
      axis
    ),
  }
}

fn render_points(points: &[Point<f64>]) -> String {
  let rendered: Vec<String> = points.iter().map(|pt| pt.to_string()).collect();
  format!("[{}]", rendered.join(", "))
}
