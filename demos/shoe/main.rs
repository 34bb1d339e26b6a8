//! Shoe scene demo: builds the placeholder shoe and logs what a renderer would draw.
//!
//! Usage:
//! ```text
//! cargo run --example shoe
//! RUST_LOG=cobbler=debug cargo run --example shoe
//! ```

use cobbler::operations::query::{BoundingBox, IsWatertight, Volume};
use cobbler::scene::SHOE_GROUP;
use cobbler::{build_shoe_scene, Result};
use tracing::info;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for cobbler and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=cobbler=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("shoe=info".parse().unwrap_or_default())
        .add_directive("cobbler=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let scene = build_shoe_scene()?;
    let [r, g, b] = scene.background().to_rgb();
    info!(r, g, b, "background");

    for item in scene.meshes()? {
        let node = scene.node(item.id)?;
        let world = BoundingBox::new(item.mesh)
            .with_transform(item.world)
            .execute()?;
        let size = world.size();
        info!(
            name = %node.name,
            vertices = item.mesh.vertices.len(),
            triangles = item.mesh.triangle_count(),
            closed = IsWatertight::new(item.mesh).execute(),
            volume = Volume::new(item.mesh).execute()?,
            size = %format!("{:.3} × {:.3} × {:.3}", size.x, size.y, size.z),
            color = %format!("#{:06x}", item.material.color.0),
            "mesh"
        );
    }

    if let Some(group) = scene.find_by_name(SHOE_GROUP) {
        if let Some(bounds) = scene.world_bounding_box(group)? {
            info!(min = ?bounds.min, max = ?bounds.max, "shoe bounds");
        }
    }

    Ok(())
}
