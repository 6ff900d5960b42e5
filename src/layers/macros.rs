//! Shared accessor boilerplate for map layers

/// Expands to the `LayerTrait` accessors that only read or write a
/// `LayerProperties` field: identity, kind, stacking, opacity, visibility
/// and the `Any` cast `Map::overlay` downcasts through.
///
/// ```ignore
/// impl LayerTrait for VectorLayer {
///     crate::impl_layer_trait!(properties);
///
///     fn options(&self) -> serde_json::Value { /* ... */ }
/// }
/// ```
#[macro_export]
macro_rules! impl_layer_trait {
    ($props:ident) => {
        fn id(&self) -> &str {
            &self.$props.id
        }

        fn name(&self) -> &str {
            &self.$props.name
        }

        fn layer_type(&self) -> $crate::layers::base::LayerType {
            self.$props.layer_type
        }

        fn z_index(&self) -> i32 {
            self.$props.z_index
        }

        fn set_z_index(&mut self, z_index: i32) {
            self.$props.z_index = z_index;
        }

        fn opacity(&self) -> f32 {
            self.$props.opacity
        }

        fn is_visible(&self) -> bool {
            self.$props.visible
        }

        fn set_visible(&mut self, visible: bool) {
            self.$props.visible = visible;
        }

        fn as_any(&self) -> &dyn ::std::any::Any {
            self
        }
    };
}
