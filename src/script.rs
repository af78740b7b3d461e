//! Page script that drives the generated carousels
//!
//! Each page gets its own controller from `createCarouselController()`, which
//! owns the registry of carousel state. The global `moveCarousel` and
//! `goToSlide` functions used by the gallery markup delegate to it.

const CAROUSEL_IDS_PLACEHOLDER: &str = "{carousel_ids}";

const SCRIPT_TEMPLATE: &str = r#"
        // Carousel functionality
        function createCarouselController() {
            const carousels = {};

            function init(carouselId) {
                const wrapper = document.getElementById(carouselId);
                if (!wrapper) return;

                const slides = wrapper.querySelectorAll('.carousel-slide');
                const indicatorsContainer = document.getElementById(carouselId + '-indicators');
                const counter = document.getElementById(carouselId + '-counter');

                carousels[carouselId] = {
                    currentSlide: 0,
                    totalSlides: slides.length,
                    wrapper: wrapper,
                    slides: slides,
                    indicators: [],
                    counter: counter
                };

                // Create indicators
                if (indicatorsContainer && slides.length > 1) {
                    for (let i = 0; i < slides.length; i++) {
                        const indicator = document.createElement('div');
                        indicator.className = 'carousel-indicator';
                        if (i === 0) indicator.classList.add('active');
                        indicator.addEventListener('click', () => goTo(carouselId, i));
                        indicatorsContainer.appendChild(indicator);
                        carousels[carouselId].indicators.push(indicator);
                    }
                }

                // Set initial position
                update(carouselId);
            }

            function move(carouselId, direction) {
                const carousel = carousels[carouselId];
                if (!carousel) return;

                carousel.currentSlide += direction;

                if (carousel.currentSlide >= carousel.totalSlides) {
                    carousel.currentSlide = 0;
                } else if (carousel.currentSlide < 0) {
                    carousel.currentSlide = carousel.totalSlides - 1;
                }

                update(carouselId);
            }

            function goTo(carouselId, slideIndex) {
                const carousel = carousels[carouselId];
                if (!carousel) return;

                carousel.currentSlide = slideIndex;
                update(carouselId);
            }

            function update(carouselId) {
                const carousel = carousels[carouselId];
                if (!carousel) return;

                // Update slides
                carousel.slides.forEach((slide, index) => {
                    slide.classList.toggle('active', index === carousel.currentSlide);
                });

                // Update wrapper position
                const translateX = -carousel.currentSlide * 100;
                carousel.wrapper.style.transform = `translateX(${translateX}%)`;

                // Update indicators
                carousel.indicators.forEach((indicator, index) => {
                    indicator.classList.toggle('active', index === carousel.currentSlide);
                });

                // Update counter
                if (carousel.counter) {
                    carousel.counter.textContent = `${carousel.currentSlide + 1} / ${carousel.totalSlides}`;
                }
            }

            return { init, move, goTo, update };
        }

        const pageCarousels = createCarouselController();

        function moveCarousel(carouselId, direction) {
            pageCarousels.move(carouselId, direction);
        }

        function goToSlide(carouselId, slideIndex) {
            pageCarousels.goTo(carouselId, slideIndex);
        }

        // Initialize all carousels
        document.addEventListener('DOMContentLoaded', () => {
            const carouselIds = [
                {carousel_ids}
            ];

            carouselIds.forEach(id => {
                pageCarousels.init(id);
            });
        });"#;

/// Generate the page script for the given carousels.
///
/// Returns `None` when the page has no carousels.
pub fn generate_script(carousel_ids: &[String]) -> Option<String> {
    if carousel_ids.is_empty() {
        return None;
    }

    let ids = carousel_ids
        .iter()
        .map(|id| format!("'{}'", id))
        .collect::<Vec<_>>()
        .join(",\n                ");

    Some(SCRIPT_TEMPLATE.replace(CAROUSEL_IDS_PLACEHOLDER, &ids))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_carousels_no_script() {
        assert_eq!(generate_script(&[]), None);
    }

    #[test]
    fn test_ids_listed_in_order() {
        let script = generate_script(&ids(&["harbor-carousel", "market-carousel"])).unwrap();
        assert!(script.contains(
            "const carouselIds = [\n                'harbor-carousel',\n                'market-carousel'\n            ];"
        ));
        assert!(!script.contains(CAROUSEL_IDS_PLACEHOLDER));
    }

    #[test]
    fn test_single_id() {
        let script = generate_script(&ids(&["tram-28-carousel"])).unwrap();
        assert!(script.contains("[\n                'tram-28-carousel'\n            ]"));
    }

    #[test]
    fn test_controller_is_page_scoped() {
        let script = generate_script(&ids(&["a-carousel"])).unwrap();
        assert!(script.starts_with("\n        // Carousel functionality"));
        assert!(script.contains("const pageCarousels = createCarouselController();"));
        assert!(script.contains("function moveCarousel(carouselId, direction)"));
        assert!(script.contains("function goToSlide(carouselId, slideIndex)"));
        assert!(script.contains("document.addEventListener('DOMContentLoaded'"));
        assert!(script.ends_with("});"));
    }

    #[test]
    fn test_wraps_and_counter_text() {
        let script = generate_script(&ids(&["a-carousel"])).unwrap();
        assert!(script.contains("carousel.currentSlide = carousel.totalSlides - 1;"));
        assert!(script.contains("carousel.currentSlide = 0;"));
        assert!(script.contains("`${carousel.currentSlide + 1} / ${carousel.totalSlides}`"));
        assert!(script.contains("`translateX(${translateX}%)`"));
    }

    #[test]
    fn test_script_is_deterministic() {
        let list = ids(&["x-carousel", "y-carousel"]);
        assert_eq!(generate_script(&list), generate_script(&list));
    }
}
