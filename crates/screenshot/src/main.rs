use anyhow::Context;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::{json, Map, Value};
use std::time::Duration;

const SITE_URL: &str = "http://localhost:4173/";
const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";
const VIEWPORT: (u32, u32) = (1920, 1080);
const LOAD_SETTLE: Duration = Duration::from_secs(3);
const SCROLL_SETTLE: Duration = Duration::from_secs(2);

const HERO_SELECTOR: &str = ".hero";
const GALLERY_SELECTOR: &str = ".helmets";
const HERO_PNG: &str = "hero-helmet.png";
const GALLERY_PNG: &str = "helmets-gallery.png";
const FULL_PAGE_PNG: &str = "full-page.png";

// Headless Chrome only exposes a WebGPU adapter with these; swiftshader
// covers hosts without a GPU.
const WEBGPU_ARGS: [&str; 4] = [
    "--enable-unsafe-webgpu",
    "--enable-features=Vulkan",
    "--use-angle=swiftshader",
    "--enable-unsafe-swiftshader",
];

/// WebDriver endpoint from `WEBDRIVER_URL`, falling back to a local chromedriver.
fn webdriver_url(env_value: Option<String>) -> String {
    env_value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_WEBDRIVER_URL.to_string())
}

fn chrome_caps(width: u32, height: u32) -> Map<String, Value> {
    let mut args = vec![
        "--headless=new".to_string(),
        format!("--window-size={width},{height}"),
        "--no-first-run".to_string(),
        "--no-default-browser-check".to_string(),
        "--hide-scrollbars".to_string(),
        "--disable-extensions".to_string(),
    ];
    args.extend(WEBGPU_ARGS.iter().map(|a| a.to_string()));
    let caps = json!({
        "browserName": "chrome",
        "goog:chromeOptions": {
            "args": args,
            "excludeSwitches": ["enable-logging"]
        }
    });
    match caps {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn scroll_into_view_script(selector: &str) -> String {
    format!(
        "const el = document.querySelector({}); if (el) {{ el.scrollIntoView({{ behavior: 'smooth' }}); }}",
        Value::String(selector.to_string())
    )
}

/// Document height reported by the page, never smaller than the viewport.
fn full_page_height(reported: &Value, viewport_height: u32) -> u32 {
    reported
        .as_f64()
        .filter(|h| h.is_finite() && *h > 0.0)
        .map(|h| h.ceil() as u32)
        .unwrap_or(viewport_height)
        .max(viewport_height)
}

async fn capture_element(client: &Client, selector: &str, path: &str) -> anyhow::Result<()> {
    let element = client
        .find(Locator::Css(selector))
        .await
        .with_context(|| format!("find {selector}"))?;
    let png = element
        .screenshot()
        .await
        .with_context(|| format!("screenshot {selector}"))?;
    tokio::fs::write(path, &png)
        .await
        .with_context(|| format!("write {path}"))?;
    log::info!("captured {} -> {} ({} bytes)", selector, path, png.len());
    Ok(())
}

async fn capture_full_page(client: &Client, path: &str) -> anyhow::Result<()> {
    let reported = client
        .execute(
            "return Math.max(document.body.scrollHeight, document.documentElement.scrollHeight);",
            vec![],
        )
        .await
        .context("measure page height")?;
    let height = full_page_height(&reported, VIEWPORT.1);
    client
        .set_window_size(VIEWPORT.0, height)
        .await
        .context("resize for full page")?;
    let png = client.screenshot().await.context("full page screenshot")?;
    tokio::fs::write(path, &png)
        .await
        .with_context(|| format!("write {path}"))?;
    log::info!("captured full page ({}px tall) -> {}", height, path);
    Ok(())
}

async fn run(client: &Client) -> anyhow::Result<()> {
    client
        .set_window_size(VIEWPORT.0, VIEWPORT.1)
        .await
        .context("set window size")?;
    client
        .goto(SITE_URL)
        .await
        .with_context(|| format!("load {SITE_URL}"))?;
    tokio::time::sleep(LOAD_SETTLE).await;

    capture_element(client, HERO_SELECTOR, HERO_PNG).await?;

    client
        .execute(&scroll_into_view_script(GALLERY_SELECTOR), vec![])
        .await
        .context("scroll to gallery")?;
    tokio::time::sleep(SCROLL_SETTLE).await;

    capture_element(client, GALLERY_SELECTOR, GALLERY_PNG).await?;
    capture_full_page(client, FULL_PAGE_PNG).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let webdriver = webdriver_url(std::env::var("WEBDRIVER_URL").ok());
    log::info!("connecting to WebDriver at {}", webdriver);
    let client = ClientBuilder::native()
        .capabilities(chrome_caps(VIEWPORT.0, VIEWPORT.1))
        .connect(&webdriver)
        .await
        .with_context(|| format!("connect to WebDriver at {webdriver}"))?;

    let result = run(&client).await;
    // Close the session even when a capture failed.
    let closed = client.close().await;
    result?;
    closed.context("close browser")?;

    println!("Screenshots saved!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webdriver_url_defaults_when_unset_or_blank() {
        assert_eq!(webdriver_url(None), DEFAULT_WEBDRIVER_URL);
        assert_eq!(webdriver_url(Some("  ".into())), DEFAULT_WEBDRIVER_URL);
        assert_eq!(
            webdriver_url(Some(" http://grid:4444 ".into())),
            "http://grid:4444"
        );
    }

    #[test]
    fn chrome_caps_request_headless_chrome_at_viewport_size() {
        let caps = chrome_caps(1920, 1080);
        assert_eq!(caps["browserName"], "chrome");
        let args = caps["goog:chromeOptions"]["args"]
            .as_array()
            .expect("args array");
        assert!(args.iter().any(|a| a == "--headless=new"));
        assert!(args.iter().any(|a| a == "--window-size=1920,1080"));
    }

    #[test]
    fn chrome_caps_expose_a_webgpu_adapter_when_headless() {
        let caps = chrome_caps(1920, 1080);
        let args = caps["goog:chromeOptions"]["args"]
            .as_array()
            .expect("args array");
        for flag in [
            "--enable-unsafe-webgpu",
            "--enable-features=Vulkan",
            "--use-angle=swiftshader",
            "--enable-unsafe-swiftshader",
        ] {
            assert!(args.iter().any(|a| a == flag), "missing {flag}");
        }
    }

    #[test]
    fn scroll_script_quotes_the_selector() {
        let script = scroll_into_view_script(".helmets");
        assert!(script.contains("document.querySelector(\".helmets\")"));
        assert!(script.contains("behavior: 'smooth'"));
    }

    #[test]
    fn full_page_height_never_shrinks_below_viewport() {
        assert_eq!(full_page_height(&json!(4321.2), 1080), 4322);
        assert_eq!(full_page_height(&json!(600), 1080), 1080);
        assert_eq!(full_page_height(&Value::Null, 1080), 1080);
        assert_eq!(full_page_height(&json!(-5), 1080), 1080);
    }
}
