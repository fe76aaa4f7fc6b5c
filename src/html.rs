use crate::preferences::Preferences;
use crate::views::{DaySlot, HourSlot, SummaryView, TileView};

/// Content of a single named page slot
enum SlotContent {
    Text(String),
    Image { src: String, alt: String },
    Container(Vec<String>),
}

struct Slot {
    id: &'static str,
    content: SlotContent,
}

/// A page with a fixed set of named slots as its only rendering targets.
/// Writes to a slot the page never declared are silent no-ops, mirroring
/// the tolerance for missing display elements.
pub struct Document {
    title: String,
    body_class: &'static str,
    slots: Vec<Slot>,
}

impl Document {
    fn new(title: &str, body_class: &'static str) -> Document {
        Document {
            title: title.to_string(),
            body_class,
            slots: Vec::new(),
        }
    }

    fn declare_text(&mut self, id: &'static str) {
        self.slots.push(Slot { id, content: SlotContent::Text(String::new()) });
    }

    fn declare_image(&mut self, id: &'static str) {
        self.slots.push(Slot {
            id,
            content: SlotContent::Image { src: String::new(), alt: String::new() },
        });
    }

    fn declare_container(&mut self, id: &'static str) {
        self.slots.push(Slot { id, content: SlotContent::Container(Vec::new()) });
    }

    fn slot_mut(&mut self, id: &str) -> Option<&mut SlotContent> {
        self.slots.iter_mut().find(|s| s.id == id).map(|s| &mut s.content)
    }

    /// Sets the text of a named slot, no-op when the slot is absent
    ///
    /// # Arguments
    ///
    /// * 'id' - the slot id
    /// * 'text' - the text to display
    pub fn set_text(&mut self, id: &str, text: &str) {
        if let Some(SlotContent::Text(current)) = self.slot_mut(id) {
            *current = escape(text);
        }
    }

    /// Sets the source and alt text of a named image slot
    ///
    /// # Arguments
    ///
    /// * 'id' - the slot id
    /// * 'src' - the image path
    /// * 'alt' - the alt text
    pub fn set_image(&mut self, id: &str, src: &str, alt: &str) {
        if let Some(SlotContent::Image { src: s, alt: a }) = self.slot_mut(id) {
            *s = src.to_string();
            *a = escape(alt);
        }
    }

    /// Removes all blocks from a container slot
    ///
    /// # Arguments
    ///
    /// * 'id' - the slot id
    pub fn clear(&mut self, id: &str) {
        if let Some(SlotContent::Container(blocks)) = self.slot_mut(id) {
            blocks.clear();
        }
    }

    /// Appends one markup block to a container slot
    ///
    /// # Arguments
    ///
    /// * 'id' - the slot id
    /// * 'block' - the markup to append
    pub fn append_block(&mut self, id: &str, block: String) {
        if let Some(SlotContent::Container(blocks)) = self.slot_mut(id) {
            blocks.push(block);
        }
    }

    /// Assembles the full page
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape(&self.title)));
        html.push_str("</head>\n");
        html.push_str(&format!("<body class=\"{}\">\n<main>\n", self.body_class));

        for slot in &self.slots {
            match &slot.content {
                SlotContent::Text(text) => {
                    html.push_str(&format!(
                        "<p id=\"{}\" class=\"has-text-white\">{}</p>\n",
                        slot.id, text
                    ));
                }
                SlotContent::Image { src, alt } => {
                    html.push_str(&format!(
                        "<img id=\"{}\" src=\"{}\" alt=\"{}\">\n",
                        slot.id, src, alt
                    ));
                }
                SlotContent::Container(blocks) => {
                    html.push_str(&format!("<div id=\"{}\" class=\"columns\">\n", slot.id));
                    for block in blocks {
                        html.push_str(block);
                        html.push('\n');
                    }
                    html.push_str("</div>\n");
                }
            }
        }

        html.push_str("</main>\n</body>\n</html>\n");
        html
    }
}

/// Builds the dashboard page shell with all its display slots
///
/// # Arguments
///
/// * 'prefs' - resolved user preferences carrying the theme
pub fn dashboard_shell(prefs: &Preferences) -> Document {
    let mut doc = Document::new("Weather Dashboard", prefs.mode.body_class());
    declare_summary_slots(&mut doc);
    doc.declare_container("hourly-forecast");
    doc.declare_container("seven-day-forecast");
    doc.declare_container("city-tiles");
    doc
}

/// Builds the city detail page shell
///
/// # Arguments
///
/// * 'prefs' - resolved user preferences carrying the theme
pub fn city_shell(prefs: &Preferences) -> Document {
    let mut doc = Document::new("City Forecast", prefs.mode.body_class());
    declare_summary_slots(&mut doc);
    doc.declare_container("hourly-forecast");
    doc.declare_container("seven-day-forecast");
    doc
}

/// Builds the settings page shell with the form control slots
///
/// # Arguments
///
/// * 'prefs' - resolved user preferences carrying the theme
pub fn settings_shell(prefs: &Preferences) -> Document {
    let mut doc = Document::new("Settings", prefs.mode.body_class());
    doc.declare_container("theme-options");
    doc.declare_container("units-options");
    doc.declare_container("default-city");
    doc.declare_container("favourite-city-list");
    doc.declare_text("fave-warning");
    doc.declare_container("save-btn");
    doc
}

fn declare_summary_slots(doc: &mut Document) {
    doc.declare_text("city-name");
    doc.declare_text("today-temp");
    doc.declare_text("today-realfeel");
    doc.declare_image("today-icon");
    doc.declare_text("today-description");
    doc.declare_text("today-wind");
}

/// Writes today's summary into its six display slots
///
/// # Arguments
///
/// * 'doc' - the page to write into
/// * 'view' - the summary display values
/// * 'prefs' - resolved user preferences
/// * 'images_path' - URL prefix for icon images
pub fn apply_summary(doc: &mut Document, view: &SummaryView, prefs: &Preferences, images_path: &str) {
    let unit = prefs.units.suffix();

    doc.set_text("city-name", &view.city_label);
    doc.set_text("today-temp", &format!("{}{}", view.temperature, unit));
    doc.set_text("today-realfeel", &format!("Real Feel {}{}", view.real_feel, unit));
    doc.set_image("today-icon", &format!("{}/{}", images_path, view.icon), &view.description);
    doc.set_text("today-description", &view.description);
    doc.set_text("today-wind", &format!("Wind: {} km/h", view.wind_kmh));
}

/// Writes the six hour preview blocks, clearing prior content first
///
/// # Arguments
///
/// * 'doc' - the page to write into
/// * 'container' - the target container slot id
/// * 'slots' - the hourly display values
/// * 'prefs' - resolved user preferences
/// * 'images_path' - URL prefix for icon images
pub fn apply_hourly(
    doc: &mut Document,
    container: &str,
    slots: &[HourSlot],
    prefs: &Preferences,
    images_path: &str,
) {
    doc.clear(container);

    for slot in slots {
        doc.append_block(
            container,
            format!(
                "<div class=\"column is-one-sixth has-text-centered box\">\
                 <p class=\"has-text-white\">{}:00</p>\
                 <img src=\"{}/{}\" alt=\"icon\">\
                 <p class=\"has-text-white\">{}{}</p></div>",
                slot.hour, images_path, slot.icon, slot.temperature, prefs.units.suffix()
            ),
        );
    }
}

/// Writes the seven day forecast blocks, clearing prior content first
///
/// # Arguments
///
/// * 'doc' - the page to write into
/// * 'container' - the target container slot id
/// * 'slots' - the daily display values
/// * 'prefs' - resolved user preferences
/// * 'images_path' - URL prefix for icon images
pub fn apply_seven_day(
    doc: &mut Document,
    container: &str,
    slots: &[DaySlot],
    prefs: &Preferences,
    images_path: &str,
) {
    doc.clear(container);

    for slot in slots {
        doc.append_block(
            container,
            forecast_block(&slot.label, &format!("{}/{}", images_path, slot.icon),
                           slot.temp_max, slot.temp_min, prefs.units.suffix()),
        );
    }
}

/// Writes one tile per favourite city, clearing prior content first
///
/// # Arguments
///
/// * 'doc' - the page to write into
/// * 'container' - the target container slot id
/// * 'tiles' - the tile display values
/// * 'prefs' - resolved user preferences
/// * 'images_path' - URL prefix for icon images
pub fn apply_city_tiles(
    doc: &mut Document,
    container: &str,
    tiles: &[TileView],
    prefs: &Preferences,
    images_path: &str,
) {
    doc.clear(container);

    for tile in tiles {
        doc.append_block(
            container,
            format!(
                "<div class=\"column is-one-third\">\
                 <a href=\"{}\" class=\"city-tile\">\
                 <div class=\"temp\">{}{}</div>\
                 <img src=\"{}/{}\" alt=\"Weather Icon\">\
                 <p>{}</p></a></div>",
                tile.href, tile.temperature, prefs.units.suffix(),
                images_path, tile.icon, escape(&tile.label)
            ),
        );
    }
}

/// Builds one forecast block for a single day
///
/// # Arguments
///
/// * 'label' - the day name
/// * 'icon_src' - full icon path
/// * 'max' - maximum temperature in display units
/// * 'min' - minimum temperature in display units
/// * 'unit' - display unit suffix
fn forecast_block(label: &str, icon_src: &str, max: i64, min: i64, unit: &str) -> String {
    format!(
        "<div class=\"column is-one-seventh has-text-centered mb-3\">\
         <p class=\"has-text-white\">{}</p>\
         <img src=\"{}\" alt=\"Weather Icon\">\
         <p class=\"has-text-white\">{}{} / {}{}</p></div>",
        escape(label), icon_src, max, unit, min, unit
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::default_prefs;

    #[test]
    fn missing_slot_writes_are_no_ops() {
        let prefs = default_prefs();
        let mut doc = city_shell(&prefs);

        doc.set_text("city-tiles", "not on this page");
        doc.append_block("city-tiles", "<div></div>".to_string());
        doc.set_text("no-such-slot", "ignored");

        let html = doc.to_html();
        assert!(!html.contains("not on this page"));
        assert!(!html.contains("no-such-slot"));
    }

    #[test]
    fn summary_writes_all_six_slots() {
        let prefs = default_prefs();
        let mut doc = dashboard_shell(&prefs);
        let view = SummaryView {
            city_label: "BERLIN".to_string(),
            temperature: 12,
            real_feel: 11,
            description: "Light rain".to_string(),
            icon: "icons8-rain-50.svg".to_string(),
            wind_kmh: 23,
        };

        apply_summary(&mut doc, &view, &prefs, "/images");
        let html = doc.to_html();

        assert!(html.contains(">BERLIN</p>"));
        assert!(html.contains("12°C"));
        assert!(html.contains("Real Feel 11°C"));
        assert!(html.contains("src=\"/images/icons8-rain-50.svg\""));
        assert!(html.contains("Light rain"));
        assert!(html.contains("Wind: 23 km/h"));
    }

    #[test]
    fn containers_are_cleared_before_appending() {
        let prefs = default_prefs();
        let mut doc = dashboard_shell(&prefs);

        doc.append_block("hourly-forecast", "<div>stale</div>".to_string());
        let slots = vec![HourSlot { hour: 9, temperature: 10, icon: "i.svg".to_string() }];
        apply_hourly(&mut doc, "hourly-forecast", &slots, &prefs, "/images");

        let html = doc.to_html();
        assert!(!html.contains("stale"));
        assert!(html.contains("9:00"));
    }

    #[test]
    fn theme_class_is_on_body() {
        let mut prefs = default_prefs();
        prefs.mode = crate::preferences::Theme::Dark;
        let doc = dashboard_shell(&prefs);
        assert!(doc.to_html().contains("<body class=\"is-dark-mode\">"));
    }
}
