use std::{fs, io::{self, Read, Write, BufWriter}, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use env_logger::Env;
use heimen::{
    batch::{project_batch, unproject_batch},
    poslist::{self, AxisOrder},
    Ellipsoid, GeodeticPoint, JapanZone, TransverseMercator,
};
use log::{debug, error, info, warn};

/// Projects coordinate text onto Gauss-Krüger plane rectangular coordinates.
///
/// Input holds one point per line, `lat lon [alt]` by default. Output holds
/// `x y [alt]` per line. With `--inverse` the input is `x y [alt]` and the
/// output is `lat lon [alt]` in the chosen axis order.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input file, stdin when omitted
    input: Option<PathBuf>,

    /// Japanese plane rectangular zone (1-19), sets the origin
    #[arg(long, conflicts_with_all = ["origin_lon", "origin_lat"])]
    zone: Option<i32>,

    /// Origin longitude (degrees)
    #[arg(long, requires = "origin_lat", allow_hyphen_values = true)]
    origin_lon: Option<f64>,

    /// Origin latitude (degrees)
    #[arg(long, requires = "origin_lon", allow_hyphen_values = true)]
    origin_lat: Option<f64>,

    /// Ellipsoid semi-major axis (meters)
    #[arg(long, default_value_t = Ellipsoid::GRS80.semi_major_axis)]
    semi_major_axis: f64,

    /// Ellipsoid inverse flattening
    #[arg(long, default_value_t = Ellipsoid::GRS80.inverse_flattening)]
    inverse_flattening: f64,

    /// Central scale factor
    #[arg(long, default_value_t = 0.9999)]
    scale: f64,

    /// Axis order of geographic coordinates: latlon or lonlat
    #[arg(long, default_value = "latlon")]
    order: AxisOrder,

    /// Map plane coordinates back to geographic coordinates
    #[arg(long)]
    inverse: bool,

    /// Abort on the first point that fails instead of skipping it
    #[arg(long)]
    strict: bool,
}

fn main() {
    let logger_env = Env::new().filter_or("HEIMEN_LOG_LEVEL", "info");

    env_logger::Builder::from_env(logger_env)
        .format_timestamp_millis()
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(err) = run(Args::parse()) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let tm = build_projection(&args)?;
    info!(
        "Origin {} on a = {}, 1/f = {}, m0 = {}",
        tm.origin(),
        tm.ellipsoid().semi_major_axis,
        tm.ellipsoid().inverse_flattening,
        tm.central_scale(),
    );

    let text = read_input(args.input.as_ref())?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.inverse {
        run_inverse(&tm, &text, &args, &mut out)?;
    } else {
        run_forward(&tm, &text, &args, &mut out)?;
    }

    out.flush()?;
    Ok(())
}

fn build_projection(args: &Args) -> Result<TransverseMercator> {
    let ellipsoid = Ellipsoid::new(args.semi_major_axis, args.inverse_flattening);

    let origin = match (args.zone, args.origin_lon, args.origin_lat) {
        (Some(zone), _, _) => JapanZone::from_number(zone)?.origin(),
        (None, Some(lon), Some(lat)) => GeodeticPoint::create(lon, lat)?,
        _ => bail!("Either --zone or both --origin-lon and --origin-lat are required"),
    };

    Ok(TransverseMercator::new(ellipsoid, origin, args.scale)?)
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).context("Cannot read stdin")?;
            Ok(text)
        }
    }
}

fn run_forward<W: Write>(tm: &TransverseMercator, text: &str, args: &Args, out: &mut W) -> Result<()> {
    let entries = poslist::parse(text, args.order)?;
    debug!("Read {} points", entries.len());

    let points = entries.iter().map(|entry| entry.point).collect::<Vec<_>>();
    let results = project_batch(tm, &points);

    let mut skipped = 0;
    for (entry, result) in entries.iter().zip(results) {
        match result {
            Ok(p) => match entry.altitude {
                Some(z) => writeln!(out, "{}", p.with_altitude(z))?,
                None => writeln!(out, "{p}")?,
            },
            Err(err) if !args.strict => {
                warn!("Skipping {}: {err}", entry.point);
                skipped += 1;
            }
            Err(err) => return Err(err).with_context(|| format!("Cannot project {}", entry.point)),
        }
    }

    info!("Projected {} points, skipped {skipped}", entries.len() - skipped);
    Ok(())
}

fn run_inverse<W: Write>(tm: &TransverseMercator, text: &str, args: &Args, out: &mut W) -> Result<()> {
    let rows = poslist::parse_plane(text)?;

    let coords = rows.iter().map(|(coord, _)| *coord).collect::<Vec<_>>();
    let results = unproject_batch(tm, &coords);

    for ((coord, altitude), result) in rows.iter().zip(results) {
        let point = match result {
            Ok(point) => point,
            Err(err) if !args.strict => {
                warn!("Skipping {coord}: {err}");
                continue;
            }
            Err(err) => return Err(err).with_context(|| format!("Cannot unproject {coord}")),
        };

        let mut buf = ryu::Buffer::new();
        let lat = buf.format(point.latitude()).to_owned();
        let lon = buf.format(point.longitude()).to_owned();
        let (first, second) = match args.order {
            AxisOrder::LatLon => (lat, lon),
            AxisOrder::LonLat => (lon, lat),
        };

        match altitude {
            Some(z) => writeln!(out, "{first} {second} {}", buf.format(*z))?,
            None => writeln!(out, "{first} {second}")?,
        }
    }

    Ok(())
}
