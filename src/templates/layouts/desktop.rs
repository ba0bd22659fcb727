use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f6f6f8; }
header { padding: 0.75rem 1.5rem; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
main { max-width: 1100px; margin: 1.5rem auto; padding: 0 1rem; }
.cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; }
.card { background: #fff; border-radius: 8px; padding: 0.75rem; cursor: pointer; box-shadow: 0 1px 2px rgba(0,0,0,.08); }
.card img { width: 100%; height: 150px; object-fit: cover; border-radius: 6px; }
.card .no-image { height: 150px; display: flex; align-items: center; justify-content: center; background: #eee; color: #888; border-radius: 6px; }
.overlay { position: fixed; inset: 0; background: rgba(0,0,0,.5); display: flex; align-items: center; justify-content: center; }
.overlay[hidden] { display: none; }
.overlay-content { background: #fff; border-radius: 10px; padding: 1.5rem; max-width: 640px; width: 90%; max-height: 85vh; overflow-y: auto; }
.overlay-content img { max-width: 100%; border-radius: 6px; }
.overlay-content dt { font-weight: 600; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
                header {
                    h3 { "Listings Dashboard" }
                }
                (content)
            }
        }
    }
}
