//! Data Artifacts - JSON Geometry Map and CSS Class Map

use serde_json::Value;

use crate::config::BuildConfig;
use crate::registry::IconRegistry;

use super::{EmitError, EmittedFile, Emitter};

/// `{fontName}.json`: icon name to geometry-path array, in registry order.
pub struct JsonEmitter;

impl Emitter for JsonEmitter {
    fn target(&self) -> &'static str {
        "json"
    }

    fn emit(
        &self,
        registry: &IconRegistry,
        config: &BuildConfig,
    ) -> Result<Vec<EmittedFile>, EmitError> {
        let mut map = serde_json::Map::with_capacity(registry.len());
        for entry in registry.entries() {
            map.insert(entry.name.clone(), Value::from(entry.geometry.clone()));
        }
        let mut contents = serde_json::to_string_pretty(&Value::Object(map))?;
        contents.push('\n');

        Ok(vec![EmittedFile::new(
            format!("{}.json", config.font_name),
            contents,
        )])
    }
}

/// `{fontName}.css`: a font-face declaration plus one class per icon with
/// the code point as an escaped-hex `content` literal.
pub struct CssEmitter;

impl Emitter for CssEmitter {
    fn target(&self) -> &'static str {
        "css"
    }

    fn emit(
        &self,
        registry: &IconRegistry,
        config: &BuildConfig,
    ) -> Result<Vec<EmittedFile>, EmitError> {
        let font = &config.font_name;
        let mut contents = format!(
            "@font-face {{\n  font-family: \"{font}\";\n  src: url(\"{font}.ttf\") format(\"truetype\");\n}}\n"
        );
        for entry in registry.entries() {
            contents.push_str(&format!(
                "\n.{font}-{name}:before {{\n  content: \"\\{code_point:x}\";\n}}\n",
                name = entry.name,
                code_point = entry.code_point,
            ));
        }

        Ok(vec![EmittedFile::new(format!("{font}.css"), contents)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::test_support::registry_from;
    use pretty_assertions::assert_eq;

    #[test]
    fn json_map_is_in_registry_order() {
        let (registry, config) = registry_from(
            &[
                ("alarm", r#"<path d="M0 0h4"/><path d="M9 9"/>"#),
                ("blank", r#"<circle r="2"/>"#),
            ],
            "myfont",
        );
        let files = JsonEmitter.emit(&registry, &config).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path.to_str(), Some("myfont.json"));
        assert_eq!(
            files[0].contents,
            "{\n  \"alarm\": [\n    \"M0 0h4\",\n    \"M9 9\"\n  ],\n  \"blank\": []\n}\n"
        );
    }

    #[test]
    fn css_embeds_escaped_code_points() {
        let (registry, config) = registry_from(&[("home", r#"<path d="M0 0"/>"#)], "myfont");
        let files = CssEmitter.emit(&registry, &config).unwrap();
        let css = &files[0].contents;
        assert!(css.contains("font-family: \"myfont\";"));
        assert!(css.contains(".myfont-home:before {\n  content: \"\\e001\";\n}"));
    }
}
