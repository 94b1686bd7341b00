use loading_gate::GateConfig;
use serde::Deserialize;

/// Id of the inline `<script type="application/json">` carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub gate: GateConfig,
}

pub fn parse(raw: &str) -> Result<SiteConfig, String> {
    let config: SiteConfig = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    config.gate.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Inline config when present and valid, defaults otherwise.
pub fn load() -> SiteConfig {
    let raw = match read_inline() {
        Ok(Some(raw)) => raw,
        Ok(None) => return SiteConfig::default(),
        Err(err) => {
            tracing::warn!(%err, "site config unavailable; using defaults");
            return SiteConfig::default();
        }
    };
    parse(&raw).unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid site config");
        SiteConfig::default()
    })
}

fn read_inline() -> Result<Option<String>, String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "document not available".to_string())?;
    Ok(document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn parses_gate_overrides() {
        let config = parse(r#"{"gate": {"routeTransitionDuration": 300}}"#).expect("parse");
        assert_eq!(config.gate.route_transition_duration, Duration::from_millis(300));
        assert_eq!(config.gate.min_loading_time, Duration::from_millis(500));
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(parse("{}").expect("parse"), SiteConfig::default());
    }

    #[test]
    fn invalid_gate_is_rejected() {
        let err = parse(r#"{"gate": {"initialLoadDuration": 100, "minLoadingTime": 400}}"#)
            .expect_err("floor above ceiling");
        assert!(err.contains("minLoadingTime"), "{err}");
    }
}
