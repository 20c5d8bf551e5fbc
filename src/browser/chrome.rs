use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig as ChromeConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout, Instant};
use tracing::{debug, warn};

use crate::app::{HarvestError, Result};
use crate::browser::{BrowserConfig, Locator, PageSource};

const READY_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Chrome session driven through chromiumoxide, reusing one tab for every page.
pub struct ChromePageSource {
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
    config: BrowserConfig,
}

impl ChromePageSource {
    /// Launch Chrome with the given configuration and open a blank tab
    pub async fn launch(config: BrowserConfig) -> Result<Self> {
        let mut builder = ChromeConfig::builder()
            .arg("--no-sandbox")
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-blink-features=AutomationControlled")
            .window_size(1920, 1080)
            .request_timeout(config.page_timeout());

        if !config.headless {
            builder = builder.with_head();
        }

        if let Some(ref dir) = config.user_data_dir {
            builder = builder.user_data_dir(dir);
        }

        let browser_config = builder
            .build()
            .map_err(|e| HarvestError::Browser(format!("Failed to build browser config: {}", e)))?;

        let (browser, mut handler) = Browser::launch(browser_config).await.map_err(|e| {
            HarvestError::Browser(format!(
                "Failed to launch browser: {}. Is Chrome or Chromium installed and in PATH?",
                e
            ))
        })?;

        let handler = tokio::spawn(async move {
            while let Some(_event) = handler.next().await {
                // Drive the CDP connection
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| HarvestError::Browser(format!("Failed to create page: {}", e)))?;

        if let Some(ref ua) = config.user_agent {
            page.set_user_agent(ua)
                .await
                .map_err(|e| HarvestError::Browser(format!("Failed to set user agent: {}", e)))?;
        }

        Ok(Self {
            browser,
            page,
            handler,
            config,
        })
    }

    /// Shut the browser down. Errors are logged, never returned.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            debug!("Browser process wait failed: {}", e);
        }
        self.handler.abort();
    }

    async fn wait_for_selector(&self, selector: &str) -> Result<()> {
        let deadline = Instant::now() + self.config.page_timeout();

        loop {
            if self.page.find_element(selector).await.is_ok() {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(HarvestError::Timeout(format!(
                    "waiting for {:?} after {}s",
                    selector, self.config.page_timeout_secs
                )));
            }
            sleep(READY_POLL_INTERVAL).await;
        }
    }
}

/// Script that clicks the first `selector` match whose text contains a phrase.
fn click_by_text_script(selector: &str, phrases: &[String]) -> String {
    let phrases: Vec<String> = phrases.iter().map(|p| p.to_lowercase()).collect();
    let selector = serde_json::to_string(selector).unwrap_or_else(|_| "\"\"".to_string());
    let phrases = serde_json::to_string(&phrases).unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"
        (() => {{
            const phrases = {phrases};
            for (const el of document.querySelectorAll({selector})) {{
                const text = (el.innerText || el.textContent || '').toLowerCase();
                if (phrases.some(p => text.includes(p))) {{
                    el.click();
                    return true;
                }}
            }}
            return false;
        }})()
        "#
    )
}

#[async_trait]
impl PageSource for ChromePageSource {
    async fn load(&self, url: &str, ready_selector: Option<&str>) -> Result<String> {
        let navigation = async {
            self.page
                .goto(url)
                .await
                .map_err(|e| HarvestError::Browser(format!("Failed to open {}: {}", url, e)))?;
            self.page
                .wait_for_navigation()
                .await
                .map_err(|e| HarvestError::Browser(format!("Navigation failed: {}", e)))?;
            Ok::<_, HarvestError>(())
        };

        timeout(self.config.page_timeout(), navigation)
            .await
            .map_err(|_| HarvestError::Timeout(format!("loading {}", url)))??;

        if let Some(selector) = ready_selector {
            self.wait_for_selector(selector).await?;
        }

        // Additional wait for client-side rendering
        sleep(self.config.settle()).await;

        self.current_markup().await
    }

    async fn click(&self, locator: &Locator) -> Result<()> {
        let clicked: bool = self
            .page
            .evaluate(click_by_text_script(&locator.selector, &locator.phrases))
            .await
            .map_err(|e| HarvestError::Browser(format!("Script execution failed: {}", e)))?
            .into_value()
            .map_err(|e| HarvestError::Browser(format!("Failed to parse result: {:?}", e)))?;

        if !clicked {
            return Err(HarvestError::Browser(format!(
                "No {:?} element mentions any of {:?}",
                locator.selector, locator.phrases
            )));
        }

        sleep(self.config.settle()).await;
        Ok(())
    }

    async fn current_markup(&self) -> Result<String> {
        self.page
            .content()
            .await
            .map_err(|e| HarvestError::Browser(format!("Failed to read page content: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_script_escapes_inputs() {
        let script = click_by_text_script(
            "button, [role=\"button\"]",
            &["Show Full".to_string(), "it's".to_string()],
        );

        assert!(script.contains(r#""button, [role=\"button\"]""#));
        assert!(script.contains(r#"["show full","it's"]"#));
        assert!(script.contains("el.click()"));
    }
}
