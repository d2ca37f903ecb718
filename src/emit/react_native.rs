//! React Native Bundle - Aggregate Text-Icon Component
//!
//! One component file embedding the icon-name to code-point glyph map, plus
//! a type declaration enumerating valid icon names as a closed union. Glyph
//! map keys are the raw registry names; uniqueness is the registry's
//! duplicate policy, enforced upstream.

use std::path::PathBuf;

use crate::config::BuildConfig;
use crate::naming::capitalized;
use crate::registry::IconRegistry;

use super::{js_string, EmitError, EmittedFile, Emitter};

const SUBTREE: &str = "react-native";

pub struct ReactNativeEmitter;

impl Emitter for ReactNativeEmitter {
    fn target(&self) -> &'static str {
        "react-native"
    }

    fn emit(
        &self,
        registry: &IconRegistry,
        config: &BuildConfig,
    ) -> Result<Vec<EmittedFile>, EmitError> {
        let component = format!("{}Icon", capitalized(&config.font_name));
        Ok(vec![
            EmittedFile::new(
                PathBuf::from(SUBTREE).join(format!("{component}.js")),
                component_source(registry, config, &component),
            ),
            EmittedFile::new(
                PathBuf::from(SUBTREE).join(format!("{component}.d.ts")),
                declaration_source(registry, &component),
            ),
        ])
    }
}

fn component_source(registry: &IconRegistry, config: &BuildConfig, component: &str) -> String {
    let mut glyphs = String::new();
    for entry in registry.entries() {
        // Decimal literals, matching the usual glyph-map convention.
        glyphs.push_str(&format!(
            "  {}: {},\n",
            js_string(&entry.name),
            entry.code_point
        ));
    }

    format!(
        "import React from 'react';\n\
         import {{ Text }} from 'react-native';\n\
         \n\
         const glyphMap = {{\n\
         {glyphs}}};\n\
         \n\
         const {component} = ({{ name, size = 16, color, style, ...props }}) => {{\n\
         {i}const glyph = glyphMap[name];\n\
         {i}const content = glyph === undefined ? '' : String.fromCodePoint(glyph);\n\
         {i}return React.createElement(\n\
         {i}{i}Text,\n\
         {i}{i}{{\n\
         {i}{i}{i}style: [{{ fontFamily: {font}, fontSize: size, color }}, style],\n\
         {i}{i}{i}...props,\n\
         {i}{i}}},\n\
         {i}{i}content\n\
         {i});\n\
         }};\n\
         \n\
         {component}.glyphMap = glyphMap;\n\
         \n\
         export default {component};\n",
        i = "  ",
        font = js_string(&config.font_name),
    )
}

fn declaration_source(registry: &IconRegistry, component: &str) -> String {
    let union = if registry.is_empty() {
        " never".to_string()
    } else {
        let mut out = String::new();
        for entry in registry.entries() {
            out.push_str(&format!("\n  | '{}'", entry.name));
        }
        out
    };

    format!(
        "import * as React from 'react';\n\
         import {{ TextProps }} from 'react-native';\n\
         \n\
         export type IconName ={union};\n\
         \n\
         export interface {component}Props extends TextProps {{\n\
         {i}name: IconName;\n\
         {i}size?: number;\n\
         {i}color?: string;\n\
         }}\n\
         \n\
         declare const {component}: React.FC<{component}Props> & {{\n\
         {i}glyphMap: Record<IconName, number>;\n\
         }};\n\
         \n\
         export default {component};\n",
        i = "  ",
    )
}
