//! Head Position Estimation Example
//!
//! Walks a few pillow readings through the weighted-centroid estimator and
//! prints a coarse text rendering of the intensity field around each
//! estimate.
//!
//! ## What You'll Learn
//!
//! - Building a sensor layout
//! - Turning raw forces into validated readings
//! - Estimating positions and sampling the intensity field
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run -p pillowmap-core --example 01_estimate_positions
//! ```

use pillowmap_core::{
    Domain, FieldSpec, IntensityField, Point, PositionEstimator, Resolution, SensorLayout,
    SensorReading, WeightedCentroid,
};

const SHADES: [char; 5] = [' ', '.', ':', '*', '#'];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("PillowMap Position Estimation Example");
    println!("=====================================\n");

    // 60 x 40 cm pillow, one sensor in each corner
    let layout = SensorLayout::builder(Domain::new(60.0, 40.0)?)
        .sensor("Pressure1", Point::new(0.0, 0.0))
        .sensor("Pressure2", Point::new(60.0, 0.0))
        .sensor("Pressure3", Point::new(0.0, 40.0))
        .sensor("Pressure4", Point::new(60.0, 40.0))
        .build()?;
    let estimator = WeightedCentroid::new(layout.clone());

    let spec = FieldSpec {
        resolution: Resolution { columns: 30, rows: 10 },
        radius: 15.0,
    };

    let rows = [
        [0.0, 0.0, 0.0, 0.0],    // empty pillow
        [12.0, 3.0, 4.0, 1.0],   // lower left
        [5.0, 5.0, 5.0, 5.0],    // centered
        [0.5, 2.0, 1.0, 14.0],   // upper right
    ];

    for (row, forces) in rows.iter().enumerate() {
        let reading = SensorReading::new(row, &layout, forces.to_vec())?;
        let position = estimator.estimate(&reading);
        println!(
            "row {}: forces {:?} -> ({:.1}, {:.1}) cm",
            row, forces, position.x, position.y
        );

        let field = IntensityField::from_spec(position, layout.domain(), &spec)?;
        print_field(&field);
        println!();
    }

    // Invalid input is rejected before it reaches the estimator
    match SensorReading::new(99, &layout, vec![1.0, -2.0, 0.0, 0.0]) {
        Ok(_) => println!("unexpectedly accepted a negative force"),
        Err(e) => println!("rejected: {}", e),
    }

    Ok(())
}

/// Top row printed first so y grows upward like on the pillow
fn print_field(field: &IntensityField) {
    let resolution = field.resolution();
    for row in (0..resolution.rows).rev() {
        let line: String = (0..resolution.columns)
            .map(|column| {
                let v = field.get(column, row).unwrap_or(0.0);
                let shade = (v * (SHADES.len() - 1) as f64).round() as usize;
                SHADES[shade.min(SHADES.len() - 1)]
            })
            .collect();
        println!("  |{}|", line);
    }
}
