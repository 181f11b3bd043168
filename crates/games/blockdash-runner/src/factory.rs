use std::collections::HashMap;

use blockdash_core::level::ObjectDescriptor;

use crate::objects::{
    GameObject, JUMP_ORB_IMPULSE, JUMP_PAD_IMPULSE, ObjectKind, SPEED_PORTAL_DEFAULT_MULTIPLIER,
};

/// Constructor for one object kind, fed the raw level entry.
pub type BuildFn = fn(&ObjectDescriptor) -> ObjectKind;

/// Maps level tags to object constructors.
///
/// `Default` registers the standard kinds; hosts may `register` extra tags at
/// startup. Lookups never fail: tag-less legacy entries and unknown tags both
/// fall back to `Block`, so any level file that parses will load.
#[derive(Clone)]
pub struct ObjectRegistry {
    builders: HashMap<String, BuildFn>,
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        let mut registry = Self {
            builders: HashMap::new(),
        };
        registry.register("Block", |_| ObjectKind::Block);
        registry.register("Spike", |_| ObjectKind::Spike);
        registry.register("JumpPad", |_| ObjectKind::JumpPad {
            impulse: JUMP_PAD_IMPULSE,
        });
        registry.register("JumpOrb", |_| ObjectKind::JumpOrb {
            impulse: JUMP_ORB_IMPULSE,
        });
        registry.register("GravityPortal", |_| ObjectKind::GravityPortal);
        registry.register("SpeedPortal", |d| ObjectKind::SpeedPortal {
            multiplier: d
                .speed_multiplier
                .unwrap_or(SPEED_PORTAL_DEFAULT_MULTIPLIER),
        });
        registry
    }
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace the constructor for a tag.
    pub fn register(&mut self, tag: &str, build: BuildFn) {
        self.builders.insert(tag.to_string(), build);
    }

    pub fn is_registered(&self, tag: &str) -> bool {
        self.builders.contains_key(tag)
    }

    /// Build a placed object from a level entry.
    pub fn build(&self, desc: &ObjectDescriptor) -> GameObject {
        let kind = match desc.object.as_deref() {
            None => ObjectKind::Block,
            Some(tag) => match self.builders.get(tag) {
                Some(build) => build(desc),
                None => {
                    tracing::debug!("Unknown object tag {tag:?}, building a Block");
                    ObjectKind::Block
                },
            },
        };
        GameObject::new(kind, desc.x, desc.y, desc.width, desc.height)
    }

    /// Build a whole level, preserving authoring order.
    pub fn build_level(&self, descriptors: &[ObjectDescriptor]) -> Vec<GameObject> {
        descriptors.iter().map(|d| self.build(d)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockdash_core::geom::Rect;

    fn descriptor(tag: Option<&str>) -> ObjectDescriptor {
        ObjectDescriptor {
            object: tag.map(str::to_string),
            ..ObjectDescriptor::default()
        }
    }

    #[test]
    fn standard_tags_are_registered() {
        let registry = ObjectRegistry::new();
        for tag in [
            "Block",
            "Spike",
            "JumpPad",
            "JumpOrb",
            "GravityPortal",
            "SpeedPortal",
        ] {
            assert!(registry.is_registered(tag), "missing standard tag {tag}");
        }
    }

    #[test]
    fn empty_descriptor_builds_a_unit_block_at_origin() {
        let obj = ObjectRegistry::new().build(&ObjectDescriptor::default());
        assert_eq!(obj.kind, ObjectKind::Block);
        assert_eq!(obj.bounds, Rect::new(0.0, 0.0, 50.0, 50.0));
    }

    #[test]
    fn unknown_tag_falls_back_to_block() {
        let obj = ObjectRegistry::new().build(&descriptor(Some("LaserWall")));
        assert_eq!(obj.kind, ObjectKind::Block);
    }

    #[test]
    fn legacy_entry_without_tag_is_a_block() {
        let obj = ObjectRegistry::new().build(&descriptor(None));
        assert_eq!(obj.kind, ObjectKind::Block);
    }

    #[test]
    fn speed_portal_multiplier_defaults() {
        let registry = ObjectRegistry::new();

        let plain = registry.build(&descriptor(Some("SpeedPortal")));
        assert_eq!(
            plain.kind,
            ObjectKind::SpeedPortal {
                multiplier: SPEED_PORTAL_DEFAULT_MULTIPLIER
            }
        );

        let mut desc = descriptor(Some("SpeedPortal"));
        desc.speed_multiplier = Some(3.5);
        let tuned = registry.build(&desc);
        assert_eq!(tuned.kind, ObjectKind::SpeedPortal { multiplier: 3.5 });
    }

    #[test]
    fn impulses_use_standard_defaults() {
        let registry = ObjectRegistry::new();
        assert_eq!(
            registry.build(&descriptor(Some("JumpPad"))).kind,
            ObjectKind::JumpPad {
                impulse: JUMP_PAD_IMPULSE
            }
        );
        assert_eq!(
            registry.build(&descriptor(Some("JumpOrb"))).kind,
            ObjectKind::JumpOrb {
                impulse: JUMP_ORB_IMPULSE
            }
        );
    }

    #[test]
    fn runtime_registration_extends_and_overrides() {
        let mut registry = ObjectRegistry::new();

        registry.register("Ghost", |_| ObjectKind::Spike);
        assert_eq!(
            registry.build(&descriptor(Some("Ghost"))).kind,
            ObjectKind::Spike
        );

        // Overriding a standard tag replaces its constructor.
        registry.register("Block", |_| ObjectKind::Spike);
        assert_eq!(
            registry.build(&descriptor(Some("Block"))).kind,
            ObjectKind::Spike
        );
    }

    #[test]
    fn build_level_preserves_authoring_order() {
        let registry = ObjectRegistry::new();
        let descriptors = vec![
            descriptor(Some("Spike")),
            descriptor(Some("Block")),
            descriptor(Some("GravityPortal")),
        ];

        let objects = registry.build_level(&descriptors);

        assert_eq!(objects.len(), 3);
        assert_eq!(objects[0].kind, ObjectKind::Spike);
        assert_eq!(objects[1].kind, ObjectKind::Block);
        assert_eq!(objects[2].kind, ObjectKind::GravityPortal);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Construction is total: arbitrary junk descriptors still build.
            #[test]
            fn build_never_panics(
                tag in proptest::option::of("[a-zA-Z0-9_]{0,24}"),
                x in -1000i32..1000,
                y in -1000i32..1000,
                w in -10i32..10,
                h in -10i32..10,
                mult in proptest::option::of(-10.0f32..10.0),
            ) {
                let desc = ObjectDescriptor {
                    object: tag,
                    x,
                    y,
                    width: w,
                    height: h,
                    speed_multiplier: mult,
                };
                let obj = ObjectRegistry::new().build(&desc);
                prop_assert_eq!(obj.bounds.x, x as f32 * 50.0);
                prop_assert_eq!(obj.bounds.y, y as f32 * 50.0);
            }
        }
    }
}
