use clap::Parser;
use nalgebra::Vector3 as NaVector3;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vector3_core::{add, cross, dot, sub, Radians, Vector3};

/// Parse a companion vector given as `x,y,z`
fn parse_vector(s: &str) -> Result<Vector3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z but got '{s}'"));
    }

    let mut components = [0.0_f64; 3];
    for (slot, part) in components.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|e| format!("invalid component '{part}': {e}"))?;
    }
    Ok(Vector3::from(components))
}

/// 3D vector math demo with configurable operations
#[derive(Parser, Debug)]
#[command(name = "vector3-demo")]
#[command(about = "Exercise Vector3 operations from the command line", long_about = None)]
struct Args {
    /// X component
    #[arg(allow_negative_numbers = true, default_value_t = 0.0)]
    x: f64,

    /// Y component
    #[arg(allow_negative_numbers = true, default_value_t = 0.0)]
    y: f64,

    /// Z component
    #[arg(allow_negative_numbers = true, default_value_t = 0.0)]
    z: f64,

    /// Rotate about the X axis by this many degrees
    #[arg(long, allow_negative_numbers = true)]
    rotate_x: Option<f64>,

    /// Rotate about the Y axis by this many degrees
    #[arg(long, allow_negative_numbers = true)]
    rotate_y: Option<f64>,

    /// Rotate about the Z axis by this many degrees
    #[arg(long, allow_negative_numbers = true)]
    rotate_z: Option<f64>,

    /// Scale the vector by this factor
    #[arg(short, long, allow_negative_numbers = true)]
    scale: Option<f64>,

    /// Normalize the vector after the other operations
    #[arg(short, long)]
    normalize: bool,

    /// Companion vector as x,y,z for sum, difference, dot and cross
    #[arg(short, long, value_parser = parse_vector, allow_hyphen_values = true)]
    with: Option<Vector3>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    println!("=== Vector3 Demo ===\n");

    let mut v = Vector3::new(args.x, args.y, args.z);
    println!("Input:      {v}  |v| = {:.4}", v.magnitude());

    if let Some(angle) = args.rotate_x {
        v.rotate_x(angle);
        info!("rotated {angle}° about X");
    }
    if let Some(angle) = args.rotate_y {
        v.rotate_y(angle);
        info!("rotated {angle}° about Y");
    }
    if let Some(angle) = args.rotate_z {
        v.rotate_z(angle);
        info!("rotated {angle}° about Z");
    }
    if let Some(factor) = args.scale {
        v *= factor;
        info!("scaled by {factor}");
    }
    if args.normalize {
        v.normalize();
        info!("normalized");
    }

    println!("Result:     {v}  |v| = {:.4}", v.magnitude());

    let Some(w) = args.with else {
        return;
    };

    println!("\n--- With {w} ---");
    println!("v + w:      {}", add(&v, &w));
    println!("v - w:      {}", sub(&v, &w));
    println!("v · w:      {:.4}", dot(&v, &w));
    println!("v × w:      {}", cross(&v, &w));

    let (na_v, na_w): (NaVector3<f64>, NaVector3<f64>) = (v.into(), w.into());
    if v.magnitude_squared() > 0.0 && w.magnitude_squared() > 0.0 {
        let angle = Radians::new(na_v.angle(&na_w));
        println!("angle(v,w): {} ({})", angle.to_degrees(), angle);
    } else {
        println!("angle(v,w): undefined for a zero-length vector");
    }
}
