//! Retained display registry.
//!
//! Components create and update named display objects; backends draw the
//! visible set each frame in z order. The registry is the only channel
//! between component state and the screen, and it is write-only from the
//! component side: nothing reads it back to reconstruct state.

use std::collections::BTreeMap;

use startpage_types::color::Color;
use startpage_types::error::{Result, StartpageError};

/// A single drawable object: a colored cell rectangle, a text run, or both.
#[derive(Debug, Clone)]
pub struct DisplayObject {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    /// Fill color. `None` draws no background.
    pub fill: Option<Color>,
    /// Text run starting at (x, y).
    pub text: Option<String>,
    pub text_color: Color,
    pub visible: bool,
    pub z: i32,
}

impl Default for DisplayObject {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            w: 0,
            h: 0,
            fill: None,
            text: None,
            text_color: Color::WHITE,
            visible: true,
            z: 0,
        }
    }
}

/// Registry of named display objects.
#[derive(Debug, Default)]
pub struct DisplayRegistry {
    objects: BTreeMap<String, DisplayObject>,
}

impl DisplayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an object with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    /// Create an object (default state) and return it for initialization.
    /// Re-creating an existing name resets it.
    pub fn create(&mut self, name: &str) -> &mut DisplayObject {
        self.objects
            .insert(name.to_string(), DisplayObject::default());
        self.objects
            .get_mut(name)
            .expect("object inserted immediately above")
    }

    /// Look up an object.
    pub fn get(&self, name: &str) -> Result<&DisplayObject> {
        self.objects
            .get(name)
            .ok_or_else(|| StartpageError::Display(format!("no such object: {name}")))
    }

    /// Look up an object mutably.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut DisplayObject> {
        self.objects
            .get_mut(name)
            .ok_or_else(|| StartpageError::Display(format!("no such object: {name}")))
    }

    /// Remove an object. Removing an absent name is not an error.
    pub fn remove(&mut self, name: &str) {
        self.objects.remove(name);
    }

    /// Number of objects (visible or not).
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Visible objects in draw order (ascending z, then name).
    pub fn draw_list(&self) -> Vec<(&str, &DisplayObject)> {
        let mut list: Vec<(&str, &DisplayObject)> = self
            .objects
            .iter()
            .filter(|(_, obj)| obj.visible)
            .map(|(name, obj)| (name.as_str(), obj))
            .collect();
        list.sort_by(|a, b| a.1.z.cmp(&b.1.z).then_with(|| a.0.cmp(b.0)));
        list
    }
}

/// Ensure-style helpers shared by components.
pub mod helpers {
    use super::*;

    /// Ensure a text object exists at (x, y) with the given color.
    /// Creates it when missing, then repositions and shows it.
    pub fn ensure_text(reg: &mut DisplayRegistry, name: &str, x: i32, y: i32, color: Color, z: i32) {
        if !reg.contains(name) {
            reg.create(name);
        }
        if let Ok(obj) = reg.get_mut(name) {
            obj.x = x;
            obj.y = y;
            obj.text_color = color;
            obj.z = z;
            obj.visible = true;
        }
    }

    /// Ensure a filled rectangle exists with the given geometry and color.
    pub fn ensure_fill(
        reg: &mut DisplayRegistry,
        name: &str,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
        z: i32,
    ) {
        if !reg.contains(name) {
            reg.create(name);
        }
        if let Ok(obj) = reg.get_mut(name) {
            obj.x = x;
            obj.y = y;
            obj.w = w;
            obj.h = h;
            obj.fill = Some(color);
            obj.z = z;
            obj.visible = true;
        }
    }

    /// Hide a set of objects by name. Missing names are skipped.
    pub fn hide_objects(reg: &mut DisplayRegistry, names: &[&str]) {
        for name in names {
            if let Ok(obj) = reg.get_mut(name) {
                obj.visible = false;
            }
        }
    }
}
