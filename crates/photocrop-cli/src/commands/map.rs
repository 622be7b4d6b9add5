use anyhow::Result;
use clap::Args;
use photocrop_core::geometry::{to_device, PhotoFrame, RelativeRect};

use crate::summary;

#[derive(Args)]
pub struct MapArgs {
    /// Photo frame on screen: x,y,width,height
    #[arg(long, value_parser = parse_frame)]
    pub frame: PhotoFrame,

    /// Relative region: x1,y1,x2,y2
    #[arg(long, value_parser = parse_region)]
    pub region: RelativeRect,

    /// Source image size as WxH, to also print the pixel crop
    #[arg(long, value_parser = parse_size)]
    pub image: Option<(u32, u32)>,
}

pub fn run(args: &MapArgs) -> Result<()> {
    if !args.frame.is_valid() {
        anyhow::bail!("Frame must have a positive width and height");
    }

    let region = args.region.sanitized(0.0);
    let device = to_device(region, args.frame);
    let pixels = match args.image {
        Some((w, h)) => Some(region.to_pixels(w, h)?),
        None => None,
    };

    summary::print_mapping(&region, &device, pixels.as_ref());
    Ok(())
}

fn parse_floats<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let values = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| format!("'{}': {e}", part.trim()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    values
        .try_into()
        .map_err(|v: Vec<f64>| format!("expected {N} comma-separated values, got {}", v.len()))
}

fn parse_frame(s: &str) -> Result<PhotoFrame, String> {
    let [x, y, width, height] = parse_floats::<4>(s)?;
    Ok(PhotoFrame::new(x, y, width, height))
}

fn parse_region(s: &str) -> Result<RelativeRect, String> {
    let [x1, y1, x2, y2] = parse_floats::<4>(s)?;
    Ok(RelativeRect::new(x1, y1, x2, y2))
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{s}'"))?;
    let w = w.trim().parse::<u32>().map_err(|e| format!("width: {e}"))?;
    let h = h.trim().parse::<u32>().map_err(|e| format!("height: {e}"))?;
    Ok((w, h))
}
