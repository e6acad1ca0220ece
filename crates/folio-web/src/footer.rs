use web_sys::Document;

/// Current year into `#year`
pub fn init_year(document: &Document) {
    let Some(target) = document.get_element_by_id("year") else {
        return;
    };
    let year = js_sys::Date::new_0().get_full_year();
    target.set_text_content(Some(&year.to_string()));
}
