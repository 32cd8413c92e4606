use anyhow::{bail, Context};
use clap::{App, Arg, ArgMatches};
use tracing::info;

fn parse(matches: &ArgMatches, name: &str) -> anyhow::Result<usize> {
    let raw = matches.value_of(name).unwrap_or_default();
    let n = raw
        .parse()
        .with_context(|| format!("--{} must be a non-negative integer, got {:?}", name, raw))?;
    if n == 0 {
        bail!("--{} must be at least 1", name);
    }
    Ok(n)
}

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::layer::SubscriberExt;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("poster=info,heatmap=info"))?;
    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(filter),
    )?;

    let matches = App::new("poster")
        .about("Spread the boundary into an empty heatmap for one step and save it as a PNG")
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .default_value("300"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .default_value("200"),
        )
        .arg(
            Arg::with_name("boundary")
                .long("boundary")
                .takes_value(true)
                .default_value("255")
                .help("intensity read for neighbours outside the heatmap"),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .short("o")
                .takes_value(true)
                .default_value("image.png"),
        )
        .get_matches();

    let width = parse(&matches, "width")?;
    let height = parse(&matches, "height")?;
    let boundary: u32 = matches
        .value_of("boundary")
        .unwrap_or_default()
        .parse()
        .context("--boundary must be an unsigned integer")?;
    let output = matches.value_of("output").unwrap_or("image.png");

    let raster = heatmap::poster(width, height, boundary)?;
    let (w, h) = raster.image.dimensions();
    info!("bounds {}x{}", w, h);
    if w > 20 && h > 20 {
        info!("pixel at (20, 20) {:?}", raster.image.get_pixel(20, 20));
    }

    image_util::save_rgba(output, &raster.image)?;
    info!("wrote {}", output);

    Ok(())
}
