use obj2scene::F;
use obj2scene::plot::{Chart, Series};

const EDGE_COUNTS: [F; 10] = [
    721., 2977., 6769., 12097., 18961., 48769., 67051., 96661., 131671., 195841.,
];
const GEOMETRY_MS: [F; 10] = [0.25, 0.75, 1.5, 2.5, 3.7, 9.5, 14.5, 21.0, 29.0, 41.0];

const RESOLUTIONS: [F; 7] = [512., 1024., 2048., 4096., 6144., 8192., 10000.];
const SHADOW_MAP_MS: [F; 7] = [1.3, 1.8, 2.5, 3.8, 5.5, 10.2, 14.0];
const SMOOTHIE_BUFFER_MS: [F; 7] = [1.35, 1.5, 2.4, 5.4, 10.8, 18.1, 25.8];

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut dir = None;
    macro_rules! help {
        () => {{
            eprintln!("Usage: plot [out_dir]");
            eprintln!("Renders the report's benchmark figures as SVG into out_dir (default `.`)");
            std::process::exit(1);
        }};
    }
    for v in std::env::args().skip(1) {
        if matches!(v.as_str(), "-h" | "--help") || v.starts_with("-") {
            help!();
        }
        if dir.is_none() {
            dir = Some(v);
        } else {
            help!();
        }
    }
    let dir = dir.unwrap_or_else(|| String::from("."));
    let dir = std::path::Path::new(&dir);

    let geometry = Chart {
        title: "Time Taken To Compute Smoothie Geometry".to_string(),
        x_label: "Edge Count".to_string(),
        y_label: "Time Elapsed (ms)".to_string(),
        series: vec![Series::from_xy("", &EDGE_COUNTS, &GEOMETRY_MS)],
    };
    geometry
        .save(dir.join("time-taken-to-compute-smoothie-geometry.svg"))
        .expect("Failed to save chart");

    let render = Chart {
        title: "Shadow Map / Smoothie Buffer Render Performance".to_string(),
        x_label: "Shadow Map / Smoothie Buffer Resolution (NxN)".to_string(),
        y_label: "Render Time (ms)".to_string(),
        series: vec![
            Series::from_xy("Shadow Map Only", &RESOLUTIONS, &SHADOW_MAP_MS),
            Series::from_xy(
                "Shadow Map + Smoothie Buffer",
                &RESOLUTIONS,
                &SMOOTHIE_BUFFER_MS,
            ),
        ],
    };
    render
        .save(dir.join("sm-smoothie-buffer-render-performance.svg"))
        .expect("Failed to save chart");
}
