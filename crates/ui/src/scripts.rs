//! Page scripts run through `document::eval`. Each one talks back with `dioxus.send`.

use folio::domain::SectionId;
use std::fmt::Write;

/// Sends `true` once the element is at least `threshold` visible, then stops observing.
pub(crate) fn observe(id: &str, threshold: f64) -> String {
    format!(
        r#"
const attach = () => {{
  const el = document.getElementById("{id}");
  if (!el) {{ requestAnimationFrame(attach); return; }}
  const observer = new IntersectionObserver((entries) => {{
    if (entries.some((entry) => entry.isIntersecting)) {{
      observer.disconnect();
      dioxus.send(true);
    }}
  }}, {{ threshold: {threshold} }});
  observer.observe(el);
}};
attach();
"#
    )
}

/// Streams scroll, resize, Escape and outside-click events for the navigation bar.
pub(crate) fn viewport(sections: &[SectionId]) -> String {
    let ids = sections.iter().fold(String::new(), |mut acc, s| {
        if !acc.is_empty() {
            acc.push(',');
        }
        let _ = write!(acc, "\"{}\"", s.id());
        acc
    });

    format!(
        r#"
const ids = [{ids}];
const report = () => {{
  const sections = ids.flatMap((id) => {{
    const el = document.getElementById(id);
    if (!el) return [];
    const rect = el.getBoundingClientRect();
    return [{{ id, top: rect.top, bottom: rect.bottom }}];
  }});
  dioxus.send({{ kind: "scroll", y: window.scrollY, width: window.innerWidth, sections }});
}};
window.addEventListener("scroll", report, {{ passive: true }});
window.addEventListener("resize", report);
document.addEventListener("keydown", (e) => {{
  if (e.key === "Escape") dioxus.send({{ kind: "escape" }});
}});
document.addEventListener("click", (e) => {{
  if (!e.target.closest("[data-nav]")) dioxus.send({{ kind: "outside_click" }});
}});
report();
"#
    )
}

/// Smooth-scrolls so the element's top lands `offset` pixels below the viewport top.
pub(crate) fn scroll_to(id: &str, offset: u32) -> String {
    format!(
        r#"
const el = document.getElementById("{id}");
if (el) window.scrollTo({{ top: el.offsetTop - {offset}, behavior: "smooth" }});
"#
    )
}

pub(crate) const SCROLL_TO_TOP: &str = r#"window.scrollTo({ top: 0, behavior: "smooth" });"#;
