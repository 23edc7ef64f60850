use fontdb::{Database, FaceInfo, Family, Query, Stretch, Style, Weight};
use rusttype::Font;
use std::{
    collections::HashMap,
    fs,
    sync::{Mutex, OnceLock},
};
use tracing::{debug, warn};
use wordclock_core::{Error, Result};

#[derive(Clone, Eq, PartialEq, Hash)]
struct FontKey {
    family: String,
    bold: bool,
    italic: bool,
}

/// Installed families tried, in order, for the generic sans-serif family
const SANS_SERIF_FAMILIES: &[&str] = &[
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "Arial",
    "Helvetica",
    "FreeSans",
];

fn db() -> &'static Database {
    static DB: OnceLock<Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        if let Some(family) = SANS_SERIF_FAMILIES
            .iter()
            .find(|family| has_family(&db, family))
        {
            db.set_sans_serif_family(*family);
        }
        debug!(
            faces = db.len(),
            sans_serif = db.family_name(&Family::SansSerif),
            "Loaded system font database"
        );
        db
    })
}

fn has_family(db: &Database, family: &str) -> bool {
    db.faces()
        .any(|face| face.families.iter().any(|(name, _)| name == family))
}

/// Resolve a system font, falling back to the generic sans-serif face and
/// then to any installed face when the family is not installed.
pub fn get_font_for(family: &str, bold: bool, italic: bool) -> Result<&'static Font<'static>> {
    static CACHE: OnceLock<Mutex<HashMap<FontKey, &'static Font<'static>>>> = OnceLock::new();
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));

    let key = FontKey {
        family: family.to_string(),
        bold,
        italic,
    };

    if let Some(font) = cache.lock().unwrap_or_else(|p| p.into_inner()).get(&key) {
        return Ok(font);
    }

    let loaded = match load_font_from_system(family, bold, italic) {
        Some(font) => font,
        None => {
            warn!(family, "Font family not installed, falling back to sans-serif");
            load_font_from_system("Sans", bold, italic)
                .or_else(first_installed_font)
                .ok_or_else(|| Error::Font(format!("no usable font for family '{}'", family)))?
        }
    };
    let font_ref: &'static Font<'static> = Box::leak(Box::new(loaded));

    cache
        .lock()
        .unwrap_or_else(|p| p.into_inner())
        .insert(key, font_ref);
    Ok(font_ref)
}

fn load_font_from_system(family: &str, bold: bool, italic: bool) -> Option<Font<'static>> {
    let families: Vec<Family<'_>> = match family.trim() {
        "" | "Sans" => vec![Family::SansSerif],
        "Serif" => vec![Family::Serif],
        "Monospace" => vec![Family::Monospace],
        other => vec![Family::Name(other)],
    };

    let query = Query {
        families: &families,
        weight: if bold { Weight::BOLD } else { Weight::NORMAL },
        stretch: Stretch::Normal,
        style: if italic { Style::Italic } else { Style::Normal },
    };

    let id = db().query(&query)?;
    load_face(db().face(id)?)
}

fn first_installed_font() -> Option<Font<'static>> {
    let font = db().faces().find_map(load_face);
    if font.is_none() {
        warn!("No installed font face could be parsed");
    }
    font
}

fn load_face(face: &FaceInfo) -> Option<Font<'static>> {
    match &face.source {
        fontdb::Source::File(path) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec_and_index(bytes, face.index)
        }
        fontdb::Source::SharedFile(path, _) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec_and_index(bytes, face.index)
        }
        fontdb::Source::Binary(bytes) => {
            Font::try_from_vec_and_index(bytes.as_ref().as_ref().to_vec(), face.index)
        }
    }
}
