//! `tagkit url <raw>` – parse, modify and reassemble a URL.

use anyhow::{Context, Result};
use std::rc::Rc;
use tagkit_core::config::TagkitConfig;
use tagkit_core::{StaticRequest, Url};

use super::split_key_value;

#[derive(Debug, Clone, Default)]
pub struct UrlArgs {
    pub raw: String,
    pub params: Vec<String>,
    pub anchor: Option<String>,
    pub referrer: Option<String>,
    pub get: Vec<String>,
    pub json: bool,
}

pub fn render_url(cfg: &TagkitConfig, args: &UrlArgs) -> Result<String> {
    let mut request = StaticRequest::new();
    if let Some(referrer) = &args.referrer {
        request = request.with_referrer(referrer.as_str());
    }
    for pair in &args.get {
        let (key, value) = split_key_value(pair)?;
        request = request.with_query_param(key, value);
    }

    let mut url = Url::with_context(Rc::new(request));
    url.set_url(&args.raw)
        .with_context(|| format!("cannot parse {:?}", args.raw))?;
    for pair in &args.params {
        let (key, value) = split_key_value(pair)?;
        url.add_param(key, value);
    }
    if !args.get.is_empty() {
        url.add_get_params();
    }
    if let Some(anchor) = &args.anchor {
        url.set_anchor(anchor);
    }

    if args.json || cfg.json_output {
        Ok(serde_json::to_string_pretty(&url.parts())?)
    } else {
        Ok(url.assemble())
    }
}

pub fn run_url(cfg: &TagkitConfig, args: &UrlArgs) -> Result<()> {
    println!("{}", render_url(cfg, args)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &str) -> UrlArgs {
        UrlArgs {
            raw: raw.to_string(),
            ..UrlArgs::default()
        }
    }

    #[test]
    fn reassembles_with_extra_params() {
        let mut a = args("http://domain.com/a/b.html?x=1");
        a.params = vec!["y=foo bar".to_string()];
        a.anchor = Some("top".to_string());
        let out = render_url(&TagkitConfig::default(), &a).unwrap();
        assert_eq!(out, "http://domain.com/a/b.html?x=1&y=foo+bar#top");
    }

    #[test]
    fn referrer_and_incoming_query() {
        let mut a = args("ref");
        a.referrer = Some("https://prev.example.com/list?page=3".to_string());
        a.get = vec!["page=9".to_string(), "sort=asc".to_string()];
        let out = render_url(&TagkitConfig::default(), &a).unwrap();
        assert_eq!(out, "https://prev.example.com/list?page=3&sort=asc");
    }

    #[test]
    fn json_from_flag_or_config() {
        let a = UrlArgs {
            json: true,
            ..args("http://d.com:81/")
        };
        let out = render_url(&TagkitConfig::default(), &a).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["domain"], "d.com");
        assert_eq!(value["port"], 81);

        let cfg = TagkitConfig {
            json_output: true,
            ..TagkitConfig::default()
        };
        let out = render_url(&cfg, &args("ftp://files.example.com/")).unwrap();
        assert!(out.contains("\"transport\": \"ftp\""));
    }

    #[test]
    fn bad_port_reports_input() {
        let a = args("http://domain.com:asdf");
        let err = render_url(&TagkitConfig::default(), &a).unwrap_err();
        assert!(format!("{err:#}").contains("domain.com:asdf"));
    }
}
