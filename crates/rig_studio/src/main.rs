//! Demo session for `rig_engine`.
//!
//! Stages a small scene, runs the camera controller command against the
//! selection, hangs three light controllers off the result, and prints the
//! scene tree. Optionally loads rig parameters from a TOML/RON config and
//! dumps the final scene to a RON snapshot:
//!
//! ```text
//! rig_studio [--config rig.toml] [--snapshot scene.ron]
//! ```

use rig_engine::prelude::*;

fn parse_flag(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1).cloned())
}

fn stage_subjects(scene: &mut Scene) {
    let mut statue = SceneObject::new(
        "Statue",
        ObjectData::Mesh {
            dimensions: Vec3::new(1.0, 1.0, 3.0),
        },
    );
    statue.transform.position = Vec3::new(0.0, 0.0, 1.5);
    let statue = scene.add_object(statue);

    let mut plinth = SceneObject::new(
        "Plinth",
        ObjectData::Mesh {
            dimensions: Vec3::new(2.0, 2.0, 1.0),
        },
    );
    plinth.transform.position = Vec3::new(4.0, 0.0, 0.5);
    let plinth = scene.add_object(plinth);

    scene.select(statue);
    scene.select(plinth);
}

fn print_tree(scene: &Scene) {
    if let Some(root) = scene.collection(scene.root_collection()) {
        println!("{}", root.name);
        print_collection(scene, scene.root_collection(), 1);
    }
}

fn print_collection(scene: &Scene, key: CollectionKey, depth: usize) {
    let Some(collection) = scene.collection(key) else {
        return;
    };
    let indent = "  ".repeat(depth);
    for object_key in &collection.objects {
        if let Some(object) = scene.object(*object_key) {
            let marker = if scene.active_object() == Some(*object_key) {
                " (active)"
            } else {
                ""
            };
            println!(
                "{indent}{} [{} constraint(s), locks: {:?}]{marker}",
                object.name,
                object.constraints.len(),
                object.locks
            );
        }
    }
    for child in &collection.children {
        if let Some(child_collection) = scene.collection(*child) {
            println!("{indent}{}/", child_collection.name);
            print_collection(scene, *child, depth + 1);
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match parse_flag(&args, "--config") {
        Some(path) => {
            log::info!("loading rig config from {path}");
            RigConfig::load_from_file(&path)?
        }
        None => RigConfig::default(),
    };

    let mut scene = Scene::new();
    stage_subjects(&mut scene);

    let pivot = create_camera_controller(&mut scene, &config)?;
    log::info!(
        "camera controller ready, pivot radius {:.3}",
        scene
            .object(pivot)
            .map_or(0.0, |object| object.transform.scale.y)
    );

    // A basic three-point setup off the same controller.
    for _ in 0..3 {
        create_light_controller(&mut scene, &config)?;
    }

    print_tree(&scene);

    if let Some(path) = parse_flag(&args, "--snapshot") {
        let text = ron::ser::to_string_pretty(&scene, ron::ser::PrettyConfig::default())?;
        std::fs::write(&path, text)?;
        log::info!("scene snapshot written to {path}");
    }

    Ok(())
}

fn main() {
    rig_engine::foundation::logging::init();

    if let Err(error) = run() {
        log::error!("session failed: {error}");
        std::process::exit(1);
    }
}
