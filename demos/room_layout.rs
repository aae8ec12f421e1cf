//! Prints the placement records of the demo room.
//!
//! Run with `RUST_LOG=debug` to see every wall and opening as it is placed.

use anyhow::Context;
use bothy::prelude::*;
use bothy::presets;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let scene = presets::demo_room().context("failed to generate the demo room")?;

    for record in &scene.records {
        let p = record.position;
        println!(
            "{:<32} {:<6} at ({:>7.3}, {:>7.3}, {:>7.3})  material={:<8} holes={}",
            record.name,
            record.shape.kind_name(),
            p.x,
            p.y,
            p.z,
            record.material,
            record.holes.len()
        );
    }

    let stats: SceneStatistics = scene.statistics();
    println!(
        "\n{} objects, {} holes, {} triangles, {} vertices, {} lights",
        stats.object_count,
        stats.hole_count,
        stats.total_triangles,
        stats.total_vertices,
        stats.light_count
    );

    Ok(())
}
