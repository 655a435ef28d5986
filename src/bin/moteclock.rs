use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context as _;
use clap::Parser;

use moteclock::{ClockLoop, CpuSurface, Surface, SystemClock};

#[derive(Parser, Debug)]
#[command(name = "moteclock", version)]
struct Cli {
    /// TTF/OTF font used to rasterize the time text.
    #[arg(long)]
    font: PathBuf,

    /// Viewport width in display units.
    #[arg(long, default_value_t = 960)]
    width: u32,

    /// Viewport height in display units.
    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Display pixel density; the canvas is allocated at `size × scale`.
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// How long to run, in seconds.
    #[arg(long, default_value_t = 3)]
    seconds: u64,

    /// Display frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Write every Nth frame as a PNG (0 disables frame output).
    #[arg(long, default_value_t = 1)]
    every: u32,

    /// Output directory for frame PNGs.
    #[arg(long, default_value = "frames")]
    out_dir: PathBuf,

    /// Write a JSON run manifest to this path.
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Seed for particle spawn placement.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(serde::Serialize)]
struct RunManifest {
    width: u32,
    height: u32,
    scale: f64,
    fps: u32,
    frames_rendered: u64,
    frames_written: u64,
    files: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.fps == 0 {
        anyhow::bail!("fps must be > 0");
    }

    let font_bytes = std::fs::read(&cli.font)
        .with_context(|| format!("read font '{}'", cli.font.display()))?;
    let mut surface = CpuSurface::new(cli.width, cli.height, cli.scale, font_bytes)?;

    if cli.every != 0 {
        std::fs::create_dir_all(&cli.out_dir)
            .with_context(|| format!("create output dir '{}'", cli.out_dir.display()))?;
    }

    let clock = SystemClock::new();
    let mut animation = ClockLoop::new(cli.seed);

    let interval = Duration::from_secs_f64(1.0 / f64::from(cli.fps));
    let total_frames = cli.seconds.saturating_mul(u64::from(cli.fps));
    let mut files = Vec::new();
    let mut next_frame = Instant::now();

    for i in 0..total_frames {
        animation.tick(&mut surface, &clock)?;

        if cli.every != 0 && i % u64::from(cli.every) == 0 {
            let frame = surface.readback_rgba8()?;
            let name = format!("frame_{i:05}.png");
            let path = cli.out_dir.join(&name);
            image::save_buffer_with_format(
                &path,
                &frame.data,
                frame.width,
                frame.height,
                image::ColorType::Rgba8,
                image::ImageFormat::Png,
            )
            .with_context(|| format!("write png '{}'", path.display()))?;
            files.push(name);
        }

        next_frame += interval;
        if let Some(wait) = next_frame.checked_duration_since(Instant::now()) {
            std::thread::sleep(wait);
        }
    }

    if let Some(path) = &cli.manifest {
        let manifest = RunManifest {
            width: cli.width,
            height: cli.height,
            scale: cli.scale,
            fps: cli.fps,
            frames_rendered: total_frames,
            frames_written: files.len() as u64,
            files,
        };
        let json = serde_json::to_string_pretty(&manifest)?;
        std::fs::write(path, json)
            .with_context(|| format!("write manifest '{}'", path.display()))?;
        eprintln!("wrote {}", path.display());
    } else {
        eprintln!(
            "rendered {total_frames} frames, wrote {} to {}",
            files.len(),
            cli.out_dir.display()
        );
    }

    Ok(())
}
