use obj2scene::convert;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut base = None;
    macro_rules! help {
        () => {{
            eprintln!("Usage: convert <scene>");
            eprintln!("Reads <scene>.obj, <scene>.head and <scene>.extra to produce <scene>.ascii");
            eprintln!("<scene>.head should contain the desired header of the scene file");
            eprintln!(
                "<scene>.extra contains extra properties (e.g. emission) not defineable in the OBJ format"
            );
            std::process::exit(1);
        }};
    }
    for v in std::env::args().skip(1) {
        if matches!(v.as_str(), "-h" | "--help") {
            help!();
        }
        if base.is_none() {
            base = Some(v);
        } else {
            help!();
        }
    }
    let Some(base) = base else {
        help!();
    };
    if base.starts_with("-") {
        help!();
    }
    println!("[INFO]: {base}.obj -> {base}.ascii");

    if let Err(e) = convert(&base) {
        eprintln!("[ERROR]: {e}");
        std::process::exit(1);
    }
}
