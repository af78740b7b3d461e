use crate::carousel::{carousel_id, CarouselState};
use crate::types::DescriptionGroup;

/// Gallery markup for one city plus the carousels it declares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    pub html: String,
    /// Carousel ids in page order, for the page script
    pub carousel_ids: Vec<String>,
}

/// Caption paragraph under a carousel
fn carousel_caption(description: &str) -> String {
    format!(
        "Experiencing the beauty and magic of {} was truly unforgettable. Each moment captured here tells a story of wonder, discovery, and the incredible journey that travel brings to our lives.",
        description
    )
}

/// Caption paragraph under a single image
fn single_caption(description: &str) -> String {
    format!(
        "Experiencing the beauty and magic of {} was truly unforgettable. This moment captured here tells a story of wonder, discovery, and the incredible journey that travel brings to our lives.",
        description
    )
}

fn caption_lines(lines: &mut Vec<String>, description: &str, text: String) {
    lines.push(r#"                    <div class="gallery-caption">"#.to_string());
    lines.push(format!("                        <h3>{}</h3>", description));
    lines.push(format!("                        <p>{}</p>", text));
    lines.push("                    </div>".to_string());
    lines.push("                </div>".to_string());
    lines.push(String::new());
}

/// Append a carousel gallery item and return its id
fn carousel_item(
    lines: &mut Vec<String>,
    city: &str,
    description: &str,
    images: &[String],
) -> String {
    let id = carousel_id(description);
    let state = CarouselState::new(images.len());

    lines.push(format!("                <!-- {} Carousel -->", description));
    lines.push(r#"                <div class="gallery-item">"#.to_string());
    lines.push(r#"                    <div class="gallery-image-container">"#.to_string());
    lines.push(r#"                        <div class="carousel-container">"#.to_string());
    lines.push(format!(
        r#"                            <div class="carousel-wrapper" id="{}">"#,
        id
    ));

    for (i, image) in images.iter().enumerate() {
        let active = if i == 0 { "active" } else { "" };
        lines.push(format!(
            r#"                                <div class="carousel-slide {}">"#,
            active
        ));
        lines.push(format!(
            r#"                                    <img src="{}/{}" alt="{} view {}" loading="lazy">"#,
            city,
            image,
            description,
            i + 1
        ));
        lines.push("                                </div>".to_string());
    }

    lines.push("                            </div>".to_string());
    lines.push(format!(
        r#"                            <button class="carousel-nav carousel-prev" onclick="moveCarousel('{}', -1)">‹</button>"#,
        id
    ));
    lines.push(format!(
        r#"                            <button class="carousel-nav carousel-next" onclick="moveCarousel('{}', 1)">›</button>"#,
        id
    ));
    lines.push(format!(
        r#"                            <div class="carousel-indicators" id="{}-indicators"></div>"#,
        id
    ));
    lines.push(format!(
        r#"                            <div class="carousel-counter" id="{}-counter">{}</div>"#,
        id,
        state.counter_text()
    ));
    lines.push("                        </div>".to_string());
    lines.push("                    </div>".to_string());
    caption_lines(lines, description, carousel_caption(description));

    id
}

/// Append a static single-image gallery item
fn single_item(lines: &mut Vec<String>, city: &str, description: &str, image: &str) {
    lines.push(format!("                <!-- {} -->", description));
    lines.push(r#"                <div class="gallery-item">"#.to_string());
    lines.push(r#"                    <div class="gallery-image-container">"#.to_string());
    lines.push(format!(
        r#"                        <img src="{}/{}" alt="{}" class="gallery-image" loading="lazy">"#,
        city, image, description
    ));
    lines.push("                    </div>".to_string());
    caption_lines(lines, description, single_caption(description));
}

/// Generate gallery HTML for a city.
///
/// Descriptions with several images become carousels, the rest static images.
/// Text is inserted verbatim; the mapping file is trusted input.
pub fn generate_gallery(city: &str, groups: &DescriptionGroup) -> Gallery {
    let mut lines = Vec::new();
    let mut carousel_ids = Vec::new();

    for (description, images) in groups {
        match images.as_slice() {
            [] => {}
            [image] => single_item(&mut lines, city, description, image),
            _ => carousel_ids.push(carousel_item(&mut lines, city, description, images)),
        }
    }

    Gallery {
        html: lines.join("\n"),
        carousel_ids,
    }
}
