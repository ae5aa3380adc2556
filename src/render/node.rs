use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, OverlayResult};
use crate::render::{RectPrimitive, TextPrimitive};

/// Declarative drawable tree handed to the chart engine.
///
/// Serialized with a `type` tag so a host can forward the tree to a renderer
/// that speaks `rect`/`text`/`group` nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawNode {
    Rect(RectPrimitive),
    Text(TextPrimitive),
    Group(GroupNode),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub children: Vec<DrawNode>,
}

impl DrawNode {
    #[must_use]
    pub fn empty_group() -> Self {
        Self::Group(GroupNode::default())
    }

    #[must_use]
    pub fn group(children: Vec<DrawNode>) -> Self {
        Self::Group(GroupNode {
            name: None,
            children,
        })
    }

    #[must_use]
    pub fn named_group(name: impl Into<String>, children: Vec<DrawNode>) -> Self {
        Self::Group(GroupNode {
            name: Some(name.into()),
            children,
        })
    }

    /// True when the tree holds no drawable primitive at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Rect(_) | Self::Text(_) => false,
            Self::Group(group) => group.children.iter().all(Self::is_empty),
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Group(group) => group.name.as_deref(),
            Self::Rect(_) | Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn children(&self) -> &[DrawNode] {
        match self {
            Self::Group(group) => &group.children,
            Self::Rect(_) | Self::Text(_) => &[],
        }
    }

    /// Rects in depth-first paint order.
    #[must_use]
    pub fn rects(&self) -> Vec<&RectPrimitive> {
        let mut out = Vec::new();
        self.visit(&mut |node| {
            if let Self::Rect(rect) = node {
                out.push(rect);
            }
        });
        out
    }

    /// Texts in depth-first paint order.
    #[must_use]
    pub fn texts(&self) -> Vec<&TextPrimitive> {
        let mut out = Vec::new();
        self.visit(&mut |node| {
            if let Self::Text(text) = node {
                out.push(text);
            }
        });
        out
    }

    #[must_use]
    pub fn find_group(&self, name: &str) -> Option<&DrawNode> {
        if self.name() == Some(name) {
            return Some(self);
        }
        self.children()
            .iter()
            .find_map(|child| child.find_group(name))
    }

    pub fn validate(&self) -> OverlayResult<()> {
        match self {
            Self::Rect(rect) => rect.validate(),
            Self::Text(text) => text.validate(),
            Self::Group(group) => {
                if group.name.as_deref() == Some("") {
                    return Err(OverlayError::InvalidData(
                        "group name must not be empty when set".to_owned(),
                    ));
                }
                group.children.iter().try_for_each(Self::validate)
            }
        }
    }

    pub fn to_json_pretty(&self) -> OverlayResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| OverlayError::InvalidData(format!("failed to serialize draw tree: {e}")))
    }

    fn visit<'a>(&'a self, f: &mut impl FnMut(&'a DrawNode)) {
        f(self);
        for child in self.children() {
            child.visit(&mut *f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DrawNode;
    use crate::core::ScreenRect;
    use crate::render::{Color, RectPrimitive, TextPrimitive};

    fn sample_tree() -> DrawNode {
        DrawNode::group(vec![
            DrawNode::named_group(
                "a",
                vec![DrawNode::Rect(RectPrimitive::new(
                    ScreenRect::new(0.0, 0.0, 4.0, 4.0),
                    Color::RED,
                    1.0,
                ))],
            ),
            DrawNode::named_group(
                "b",
                vec![DrawNode::Text(TextPrimitive::new(
                    "hi",
                    1.0,
                    1.0,
                    12.0,
                    Color::GRAY,
                ))],
            ),
        ])
    }

    #[test]
    fn nested_empty_groups_count_as_empty() {
        let tree = DrawNode::group(vec![DrawNode::empty_group(), DrawNode::group(vec![])]);
        assert!(tree.is_empty());
        assert!(!sample_tree().is_empty());
    }

    #[test]
    fn find_group_walks_nested_children() {
        let tree = sample_tree();
        let group = tree.find_group("b").expect("group b");
        assert_eq!(group.texts().len(), 1);
        assert!(tree.find_group("c").is_none());
    }

    #[test]
    fn json_uses_type_tags() {
        let json = sample_tree().to_json_pretty().expect("json");
        assert!(json.contains("\"type\": \"group\""));
        assert!(json.contains("\"type\": \"rect\""));
        assert!(json.contains("\"type\": \"text\""));
        let parsed: DrawNode = serde_json::from_str(&json).expect("parse back");
        assert_eq!(parsed, sample_tree());
    }
}
