use std::io::Read as _;
use std::path::PathBuf;

use adforge::{
    Brief, Canvas, FontBank, RenderOpts, Script, SlideStyle, Tone, export,
    render_slides_with_bank,
};

fn rendered_slides() -> Vec<adforge::SlideFrame> {
    let script = Script::from_brief(&Brief {
        brand: "Acme".to_string(),
        offer: "Tool X".to_string(),
        audience: "Devs".to_string(),
        goal: "ship faster".to_string(),
        tone: Tone::Friendly,
        duration_seconds: 30,
    });
    let opts = RenderOpts {
        canvas: Canvas::new(24, 40).unwrap(),
        style: SlideStyle::default(),
        logo: None,
        fonts_dir: None,
    };
    render_slides_with_bank(&script, &opts, &FontBank::empty()).unwrap()
}

#[test]
fn pngs_are_written_with_the_fixed_name_pattern() {
    let dir = PathBuf::from("target").join("export_slides_pngs");
    let _ = std::fs::remove_dir_all(&dir);

    let slides = rendered_slides();
    let paths = export::write_slide_pngs(&slides, &dir).unwrap();

    assert_eq!(paths.len(), 6);
    for (i, path) in paths.iter().enumerate() {
        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            format!("slide_{:02}.png", i + 1)
        );
        let decoded = image::open(path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (24, 40));
    }
}

#[test]
fn zip_bundle_contains_one_entry_per_slide() {
    let dir = PathBuf::from("target").join("export_slides_zip");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    let slides = rendered_slides();
    let zip_path = dir.join(export::ZIP_BUNDLE_NAME);
    export::write_slides_zip(&slides, &zip_path).unwrap();

    let file = std::fs::File::open(&zip_path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    assert_eq!(archive.len(), 6);

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).unwrap();
        assert_eq!(entry.name(), format!("slide_{:02}.png", i + 1));

        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (24, 40));
    }
}
