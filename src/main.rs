use clap::Parser;
use geohash_logic::{Error, GeoHash, constants::DEFAULT_LENGTH, decode, encode};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 座標を GeoHash にエンコードし、それをデコードして表示する
#[derive(Parser)]
#[command(name = "geohash-logic", version)]
struct Cli {
    /// 経度（度）
    #[arg(allow_negative_numbers = true, default_value_t = 170.7896)]
    longitude: f64,

    /// 緯度（度）
    #[arg(allow_negative_numbers = true, default_value_t = -78.11868)]
    latitude: f64,

    /// 出力する文字数（1–11）
    #[arg(long, short, default_value_t = DEFAULT_LENGTH)]
    length: usize,
}

fn main() -> Result<(), Error> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let hash: GeoHash = encode(cli.longitude, cli.latitude, cli.length)?;
    info!(longitude = cli.longitude, latitude = cli.latitude, %hash, "encoded");

    let center = decode(hash.as_str())?;
    let bounds = hash.bounds();
    info!(%center, min = %bounds.min(), max = %bounds.max(), "decoded");

    let neighbors = hash.neighbors();
    info!(
        top = %neighbors.top,
        right = %neighbors.right,
        bottom = %neighbors.bottom,
        left = %neighbors.left,
        "neighbors"
    );

    Ok(())
}
