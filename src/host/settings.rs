//! Per-type modifier settings and their member schemas.
//!
//! Each settings struct lists its members in declaration order and reads or
//! writes them by name. Writes validate the value's shape; enum members only
//! accept their listed identifiers.

use std::collections::BTreeSet;

use crate::property::{PropertyDescriptor, PropertyError, PropertyValue};

use super::modifier::ModifierType;
use super::namespace::DataHandle;

fn text(value: &str) -> PropertyValue {
    PropertyValue::Text(value.to_string())
}

fn unknown(name: &str) -> PropertyError {
    PropertyError::Unknown(name.to_string())
}

fn object_ref(name: &str, value: &PropertyValue) -> Result<Option<DataHandle>, PropertyError> {
    match value {
        PropertyValue::Null => Ok(None),
        PropertyValue::Data(handle @ DataHandle::Object(_)) => Ok(Some(*handle)),
        other => Err(PropertyError::mismatch(name, "Object", other.type_name())),
    }
}

fn vertex_group_ref(
    name: &str,
    value: &PropertyValue,
) -> Result<Option<DataHandle>, PropertyError> {
    match value {
        PropertyValue::Null => Ok(None),
        PropertyValue::Data(handle @ DataHandle::VertexGroup { .. }) => Ok(Some(*handle)),
        other => Err(PropertyError::mismatch(name, "VertexGroup", other.type_name())),
    }
}

// ============================================================================
// Array
// ============================================================================

const ARRAY_FIT_TYPES: &[&str] = &["FIXED_COUNT", "FIT_LENGTH", "FIT_CURVE"];

#[derive(Debug, Clone, PartialEq)]
pub struct ArraySettings {
    pub fit_type: &'static str,
    pub count: i64,
    pub fit_length: f64,
    pub use_relative_offset: bool,
    pub relative_offset_displace: [f64; 3],
    pub use_constant_offset: bool,
    pub constant_offset_displace: [f64; 3],
    pub use_object_offset: bool,
    pub offset_object: Option<DataHandle>,
    pub use_merge_vertices: bool,
    pub merge_threshold: f64,
}

impl Default for ArraySettings {
    fn default() -> Self {
        Self {
            fit_type: "FIXED_COUNT",
            count: 2,
            fit_length: 0.0,
            use_relative_offset: true,
            relative_offset_displace: [1.0, 0.0, 0.0],
            use_constant_offset: false,
            constant_offset_displace: [0.0, 0.0, 0.0],
            use_object_offset: false,
            offset_object: None,
            use_merge_vertices: false,
            merge_threshold: 0.01,
        }
    }
}

impl ArraySettings {
    const MEMBERS: &'static [PropertyDescriptor] = &[
        PropertyDescriptor::property("fit_type"),
        PropertyDescriptor::property("count"),
        PropertyDescriptor::property("fit_length"),
        PropertyDescriptor::property("use_relative_offset"),
        PropertyDescriptor::property("relative_offset_displace"),
        PropertyDescriptor::property("use_constant_offset"),
        PropertyDescriptor::property("constant_offset_displace"),
        PropertyDescriptor::property("use_object_offset"),
        PropertyDescriptor::property("offset_object"),
        PropertyDescriptor::property("use_merge_vertices"),
        PropertyDescriptor::property("merge_threshold"),
    ];

    fn read(&self, name: &str) -> Result<PropertyValue, PropertyError> {
        Ok(match name {
            "fit_type" => text(self.fit_type),
            "count" => PropertyValue::Int(self.count),
            "fit_length" => PropertyValue::Float(self.fit_length),
            "use_relative_offset" => PropertyValue::Bool(self.use_relative_offset),
            "relative_offset_displace" => PropertyValue::floats(&self.relative_offset_displace),
            "use_constant_offset" => PropertyValue::Bool(self.use_constant_offset),
            "constant_offset_displace" => PropertyValue::floats(&self.constant_offset_displace),
            "use_object_offset" => PropertyValue::Bool(self.use_object_offset),
            "offset_object" => self.offset_object.into(),
            "use_merge_vertices" => PropertyValue::Bool(self.use_merge_vertices),
            "merge_threshold" => PropertyValue::Float(self.merge_threshold),
            _ => return Err(unknown(name)),
        })
    }

    fn write(&mut self, name: &str, value: &PropertyValue) -> Result<(), PropertyError> {
        match name {
            "fit_type" => self.fit_type = value.as_enum(name, ARRAY_FIT_TYPES)?,
            "count" => self.count = value.as_int(name)?.max(1),
            "fit_length" => self.fit_length = value.as_float(name)?.max(0.0),
            "use_relative_offset" => self.use_relative_offset = value.as_bool(name)?,
            "relative_offset_displace" => {
                self.relative_offset_displace = value.as_float_array(name)?
            }
            "use_constant_offset" => self.use_constant_offset = value.as_bool(name)?,
            "constant_offset_displace" => {
                self.constant_offset_displace = value.as_float_array(name)?
            }
            "use_object_offset" => self.use_object_offset = value.as_bool(name)?,
            "offset_object" => self.offset_object = object_ref(name, value)?,
            "use_merge_vertices" => self.use_merge_vertices = value.as_bool(name)?,
            "merge_threshold" => self.merge_threshold = value.as_float(name)?.max(0.0),
            _ => return Err(unknown(name)),
        }
        Ok(())
    }
}

// ============================================================================
// Bevel
// ============================================================================

const BEVEL_AFFECT: &[&str] = &["VERTICES", "EDGES"];
const BEVEL_OFFSET_TYPES: &[&str] = &["OFFSET", "WIDTH", "DEPTH", "PERCENT", "ABSOLUTE"];
const BEVEL_LIMIT_METHODS: &[&str] = &["NONE", "ANGLE", "WEIGHT", "VGROUP"];

#[derive(Debug, Clone, PartialEq)]
pub struct BevelSettings {
    pub affect: &'static str,
    pub offset_type: &'static str,
    pub width: f64,
    pub segments: i64,
    pub limit_method: &'static str,
    pub angle_limit: f64,
    pub vertex_group: Option<DataHandle>,
    pub profile: f64,
    pub use_clamp_overlap: bool,
    pub harden_normals: bool,
}

impl Default for BevelSettings {
    fn default() -> Self {
        Self {
            affect: "EDGES",
            offset_type: "OFFSET",
            width: 0.1,
            segments: 1,
            limit_method: "ANGLE",
            angle_limit: 30f64.to_radians(),
            vertex_group: None,
            profile: 0.5,
            use_clamp_overlap: true,
            harden_normals: false,
        }
    }
}

impl BevelSettings {
    const MEMBERS: &'static [PropertyDescriptor] = &[
        PropertyDescriptor::property("affect"),
        PropertyDescriptor::property("offset_type"),
        PropertyDescriptor::property("width"),
        PropertyDescriptor::property("segments"),
        PropertyDescriptor::property("limit_method"),
        PropertyDescriptor::property("angle_limit"),
        PropertyDescriptor::property("vertex_group"),
        PropertyDescriptor::property("profile"),
        PropertyDescriptor::property("use_clamp_overlap"),
        PropertyDescriptor::property("harden_normals"),
    ];

    fn read(&self, name: &str) -> Result<PropertyValue, PropertyError> {
        Ok(match name {
            "affect" => text(self.affect),
            "offset_type" => text(self.offset_type),
            "width" => PropertyValue::Float(self.width),
            "segments" => PropertyValue::Int(self.segments),
            "limit_method" => text(self.limit_method),
            "angle_limit" => PropertyValue::Float(self.angle_limit),
            "vertex_group" => self.vertex_group.into(),
            "profile" => PropertyValue::Float(self.profile),
            "use_clamp_overlap" => PropertyValue::Bool(self.use_clamp_overlap),
            "harden_normals" => PropertyValue::Bool(self.harden_normals),
            _ => return Err(unknown(name)),
        })
    }

    fn write(&mut self, name: &str, value: &PropertyValue) -> Result<(), PropertyError> {
        match name {
            "affect" => self.affect = value.as_enum(name, BEVEL_AFFECT)?,
            "offset_type" => self.offset_type = value.as_enum(name, BEVEL_OFFSET_TYPES)?,
            "width" => self.width = value.as_float(name)?.max(0.0),
            "segments" => self.segments = value.as_int(name)?.clamp(1, 1000),
            "limit_method" => self.limit_method = value.as_enum(name, BEVEL_LIMIT_METHODS)?,
            "angle_limit" => {
                self.angle_limit = value.as_float(name)?.clamp(0.0, std::f64::consts::PI)
            }
            "vertex_group" => self.vertex_group = vertex_group_ref(name, value)?,
            "profile" => self.profile = value.as_float(name)?.clamp(0.0, 1.0),
            "use_clamp_overlap" => self.use_clamp_overlap = value.as_bool(name)?,
            "harden_normals" => self.harden_normals = value.as_bool(name)?,
            _ => return Err(unknown(name)),
        }
        Ok(())
    }
}

// ============================================================================
// Mirror
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct MirrorSettings {
    pub use_axis: [bool; 3],
    pub use_bisect_axis: [bool; 3],
    pub use_bisect_flip_axis: [bool; 3],
    pub mirror_object: Option<DataHandle>,
    pub use_clip: bool,
    pub use_mirror_merge: bool,
    pub merge_threshold: f64,
    pub use_mirror_vertex_groups: bool,
}

impl Default for MirrorSettings {
    fn default() -> Self {
        Self {
            use_axis: [true, false, false],
            use_bisect_axis: [false; 3],
            use_bisect_flip_axis: [false; 3],
            mirror_object: None,
            use_clip: false,
            use_mirror_merge: true,
            merge_threshold: 0.001,
            use_mirror_vertex_groups: true,
        }
    }
}

impl MirrorSettings {
    const MEMBERS: &'static [PropertyDescriptor] = &[
        PropertyDescriptor::property("use_axis"),
        PropertyDescriptor::property("use_bisect_axis"),
        PropertyDescriptor::property("use_bisect_flip_axis"),
        PropertyDescriptor::property("mirror_object"),
        PropertyDescriptor::property("use_clip"),
        PropertyDescriptor::property("use_mirror_merge"),
        PropertyDescriptor::property("merge_threshold"),
        PropertyDescriptor::property("use_mirror_vertex_groups"),
    ];

    fn read(&self, name: &str) -> Result<PropertyValue, PropertyError> {
        Ok(match name {
            "use_axis" => PropertyValue::bools(&self.use_axis),
            "use_bisect_axis" => PropertyValue::bools(&self.use_bisect_axis),
            "use_bisect_flip_axis" => PropertyValue::bools(&self.use_bisect_flip_axis),
            "mirror_object" => self.mirror_object.into(),
            "use_clip" => PropertyValue::Bool(self.use_clip),
            "use_mirror_merge" => PropertyValue::Bool(self.use_mirror_merge),
            "merge_threshold" => PropertyValue::Float(self.merge_threshold),
            "use_mirror_vertex_groups" => PropertyValue::Bool(self.use_mirror_vertex_groups),
            _ => return Err(unknown(name)),
        })
    }

    fn write(&mut self, name: &str, value: &PropertyValue) -> Result<(), PropertyError> {
        match name {
            "use_axis" => self.use_axis = value.as_bool_array(name)?,
            "use_bisect_axis" => self.use_bisect_axis = value.as_bool_array(name)?,
            "use_bisect_flip_axis" => self.use_bisect_flip_axis = value.as_bool_array(name)?,
            "mirror_object" => self.mirror_object = object_ref(name, value)?,
            "use_clip" => self.use_clip = value.as_bool(name)?,
            "use_mirror_merge" => self.use_mirror_merge = value.as_bool(name)?,
            "merge_threshold" => self.merge_threshold = value.as_float(name)?.max(0.0),
            "use_mirror_vertex_groups" => self.use_mirror_vertex_groups = value.as_bool(name)?,
            _ => return Err(unknown(name)),
        }
        Ok(())
    }
}

// ============================================================================
// Subdivision surface
// ============================================================================

const SUBSURF_UV_SMOOTH: &[&str] = &[
    "NONE",
    "PRESERVE_CORNERS",
    "PRESERVE_CORNERS_AND_JUNCTIONS",
    "PRESERVE_CORNERS_JUNCTIONS_AND_CONCAVE",
    "PRESERVE_BOUNDARIES",
    "SMOOTH_ALL",
];
const SUBSURF_BOUNDARY_SMOOTH: &[&str] = &["PRESERVE_CORNERS", "ALL"];

#[derive(Debug, Clone, PartialEq)]
pub struct SubsurfSettings {
    pub levels: i64,
    pub render_levels: i64,
    pub quality: i64,
    pub uv_smooth: &'static str,
    pub boundary_smooth: &'static str,
    pub use_limit_surface: bool,
    pub use_creases: bool,
    pub show_only_control_edges: bool,
}

impl Default for SubsurfSettings {
    fn default() -> Self {
        Self {
            levels: 1,
            render_levels: 2,
            quality: 3,
            uv_smooth: "PRESERVE_BOUNDARIES",
            boundary_smooth: "ALL",
            use_limit_surface: true,
            use_creases: true,
            show_only_control_edges: true,
        }
    }
}

impl SubsurfSettings {
    const MEMBERS: &'static [PropertyDescriptor] = &[
        PropertyDescriptor::property("levels"),
        PropertyDescriptor::property("render_levels"),
        PropertyDescriptor::property("quality"),
        PropertyDescriptor::property("uv_smooth"),
        PropertyDescriptor::property("boundary_smooth"),
        PropertyDescriptor::property("use_limit_surface"),
        PropertyDescriptor::property("use_creases"),
        PropertyDescriptor::property("show_only_control_edges"),
    ];

    fn read(&self, name: &str) -> Result<PropertyValue, PropertyError> {
        Ok(match name {
            "levels" => PropertyValue::Int(self.levels),
            "render_levels" => PropertyValue::Int(self.render_levels),
            "quality" => PropertyValue::Int(self.quality),
            "uv_smooth" => text(self.uv_smooth),
            "boundary_smooth" => text(self.boundary_smooth),
            "use_limit_surface" => PropertyValue::Bool(self.use_limit_surface),
            "use_creases" => PropertyValue::Bool(self.use_creases),
            "show_only_control_edges" => PropertyValue::Bool(self.show_only_control_edges),
            _ => return Err(unknown(name)),
        })
    }

    fn write(&mut self, name: &str, value: &PropertyValue) -> Result<(), PropertyError> {
        match name {
            "levels" => self.levels = value.as_int(name)?.clamp(0, 11),
            "render_levels" => self.render_levels = value.as_int(name)?.clamp(0, 11),
            "quality" => self.quality = value.as_int(name)?.clamp(1, 10),
            "uv_smooth" => self.uv_smooth = value.as_enum(name, SUBSURF_UV_SMOOTH)?,
            "boundary_smooth" => {
                self.boundary_smooth = value.as_enum(name, SUBSURF_BOUNDARY_SMOOTH)?
            }
            "use_limit_surface" => self.use_limit_surface = value.as_bool(name)?,
            "use_creases" => self.use_creases = value.as_bool(name)?,
            "show_only_control_edges" => self.show_only_control_edges = value.as_bool(name)?,
            _ => return Err(unknown(name)),
        }
        Ok(())
    }
}

// ============================================================================
// Solidify
// ============================================================================

const SOLIDIFY_MODES: &[&str] = &["EXTRUDE", "NON_MANIFOLD"];

#[derive(Debug, Clone, PartialEq)]
pub struct SolidifySettings {
    pub solidify_mode: &'static str,
    pub thickness: f64,
    pub offset: f64,
    pub use_even_offset: bool,
    pub use_rim: bool,
    pub use_flip_normals: bool,
    pub vertex_group: Option<DataHandle>,
    pub material_offset: i64,
}

impl Default for SolidifySettings {
    fn default() -> Self {
        Self {
            solidify_mode: "EXTRUDE",
            thickness: 0.01,
            offset: -1.0,
            use_even_offset: false,
            use_rim: true,
            use_flip_normals: false,
            vertex_group: None,
            material_offset: 0,
        }
    }
}

impl SolidifySettings {
    const MEMBERS: &'static [PropertyDescriptor] = &[
        PropertyDescriptor::property("solidify_mode"),
        PropertyDescriptor::property("thickness"),
        PropertyDescriptor::property("offset"),
        PropertyDescriptor::property("use_even_offset"),
        PropertyDescriptor::property("use_rim"),
        PropertyDescriptor::property("use_flip_normals"),
        PropertyDescriptor::property("vertex_group"),
        PropertyDescriptor::property("material_offset"),
    ];

    fn read(&self, name: &str) -> Result<PropertyValue, PropertyError> {
        Ok(match name {
            "solidify_mode" => text(self.solidify_mode),
            "thickness" => PropertyValue::Float(self.thickness),
            "offset" => PropertyValue::Float(self.offset),
            "use_even_offset" => PropertyValue::Bool(self.use_even_offset),
            "use_rim" => PropertyValue::Bool(self.use_rim),
            "use_flip_normals" => PropertyValue::Bool(self.use_flip_normals),
            "vertex_group" => self.vertex_group.into(),
            "material_offset" => PropertyValue::Int(self.material_offset),
            _ => return Err(unknown(name)),
        })
    }

    fn write(&mut self, name: &str, value: &PropertyValue) -> Result<(), PropertyError> {
        match name {
            "solidify_mode" => self.solidify_mode = value.as_enum(name, SOLIDIFY_MODES)?,
            "thickness" => self.thickness = value.as_float(name)?,
            "offset" => self.offset = value.as_float(name)?.clamp(-1.0, 1.0),
            "use_even_offset" => self.use_even_offset = value.as_bool(name)?,
            "use_rim" => self.use_rim = value.as_bool(name)?,
            "use_flip_normals" => self.use_flip_normals = value.as_bool(name)?,
            "vertex_group" => self.vertex_group = vertex_group_ref(name, value)?,
            "material_offset" => self.material_offset = value.as_int(name)?,
            _ => return Err(unknown(name)),
        }
        Ok(())
    }
}

// ============================================================================
// Armature
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ArmatureSettings {
    pub object: Option<DataHandle>,
    pub use_deform_preserve_volume: bool,
    pub use_vertex_groups: bool,
    pub use_bone_envelopes: bool,
    pub use_multi_modifier: bool,
    pub vertex_group: Option<DataHandle>,
    pub invert_vertex_group: bool,
}

impl Default for ArmatureSettings {
    fn default() -> Self {
        Self {
            object: None,
            use_deform_preserve_volume: false,
            use_vertex_groups: true,
            use_bone_envelopes: false,
            use_multi_modifier: false,
            vertex_group: None,
            invert_vertex_group: false,
        }
    }
}

impl ArmatureSettings {
    const MEMBERS: &'static [PropertyDescriptor] = &[
        PropertyDescriptor::property("object"),
        PropertyDescriptor::property("use_deform_preserve_volume"),
        PropertyDescriptor::property("use_vertex_groups"),
        PropertyDescriptor::property("use_bone_envelopes"),
        PropertyDescriptor::property("use_multi_modifier"),
        PropertyDescriptor::property("vertex_group"),
        PropertyDescriptor::property("invert_vertex_group"),
    ];

    fn read(&self, name: &str) -> Result<PropertyValue, PropertyError> {
        Ok(match name {
            "object" => self.object.into(),
            "use_deform_preserve_volume" => PropertyValue::Bool(self.use_deform_preserve_volume),
            "use_vertex_groups" => PropertyValue::Bool(self.use_vertex_groups),
            "use_bone_envelopes" => PropertyValue::Bool(self.use_bone_envelopes),
            "use_multi_modifier" => PropertyValue::Bool(self.use_multi_modifier),
            "vertex_group" => self.vertex_group.into(),
            "invert_vertex_group" => PropertyValue::Bool(self.invert_vertex_group),
            _ => return Err(unknown(name)),
        })
    }

    fn write(&mut self, name: &str, value: &PropertyValue) -> Result<(), PropertyError> {
        match name {
            "object" => self.object = object_ref(name, value)?,
            "use_deform_preserve_volume" => {
                self.use_deform_preserve_volume = value.as_bool(name)?
            }
            "use_vertex_groups" => self.use_vertex_groups = value.as_bool(name)?,
            "use_bone_envelopes" => self.use_bone_envelopes = value.as_bool(name)?,
            "use_multi_modifier" => self.use_multi_modifier = value.as_bool(name)?,
            "vertex_group" => self.vertex_group = vertex_group_ref(name, value)?,
            "invert_vertex_group" => self.invert_vertex_group = value.as_bool(name)?,
            _ => return Err(unknown(name)),
        }
        Ok(())
    }
}

// ============================================================================
// Displace
// ============================================================================

const DISPLACE_DIRECTIONS: &[&str] = &["X", "Y", "Z", "NORMAL", "CUSTOM_NORMAL", "RGB_TO_XYZ"];
const DISPLACE_SPACES: &[&str] = &["LOCAL", "GLOBAL"];
const DISPLACE_TEXTURE_COORDS: &[&str] = &["LOCAL", "GLOBAL", "OBJECT", "UV"];

#[derive(Debug, Clone, PartialEq)]
pub struct DisplaceSettings {
    pub direction: &'static str,
    pub space: &'static str,
    pub texture_coords: &'static str,
    pub texture_coords_object: Option<DataHandle>,
    pub strength: f64,
    pub mid_level: f64,
    pub vertex_group: Option<DataHandle>,
}

impl Default for DisplaceSettings {
    fn default() -> Self {
        Self {
            direction: "NORMAL",
            space: "LOCAL",
            texture_coords: "LOCAL",
            texture_coords_object: None,
            strength: 1.0,
            mid_level: 0.5,
            vertex_group: None,
        }
    }
}

impl DisplaceSettings {
    const MEMBERS: &'static [PropertyDescriptor] = &[
        PropertyDescriptor::property("direction"),
        PropertyDescriptor::property("space"),
        PropertyDescriptor::property("texture_coords"),
        PropertyDescriptor::property("texture_coords_object"),
        PropertyDescriptor::property("strength"),
        PropertyDescriptor::property("mid_level"),
        PropertyDescriptor::property("vertex_group"),
    ];

    fn read(&self, name: &str) -> Result<PropertyValue, PropertyError> {
        Ok(match name {
            "direction" => text(self.direction),
            "space" => text(self.space),
            "texture_coords" => text(self.texture_coords),
            "texture_coords_object" => self.texture_coords_object.into(),
            "strength" => PropertyValue::Float(self.strength),
            "mid_level" => PropertyValue::Float(self.mid_level),
            "vertex_group" => self.vertex_group.into(),
            _ => return Err(unknown(name)),
        })
    }

    fn write(&mut self, name: &str, value: &PropertyValue) -> Result<(), PropertyError> {
        match name {
            "direction" => self.direction = value.as_enum(name, DISPLACE_DIRECTIONS)?,
            "space" => self.space = value.as_enum(name, DISPLACE_SPACES)?,
            "texture_coords" => {
                self.texture_coords = value.as_enum(name, DISPLACE_TEXTURE_COORDS)?
            }
            "texture_coords_object" => self.texture_coords_object = object_ref(name, value)?,
            "strength" => self.strength = value.as_float(name)?,
            "mid_level" => self.mid_level = value.as_float(name)?,
            "vertex_group" => self.vertex_group = vertex_group_ref(name, value)?,
            _ => return Err(unknown(name)),
        }
        Ok(())
    }
}

// ============================================================================
// Vertex weight edit
// ============================================================================

const WEIGHT_FALLOFF_TYPES: &[&str] = &[
    "LINEAR",
    "CURVE",
    "SHARP",
    "SMOOTH",
    "ROOT",
    "ICON_SPHERECURVE",
    "RANDOM",
    "STEP",
];

#[derive(Debug, Clone, PartialEq)]
pub struct VertexWeightEditSettings {
    pub vertex_group: Option<DataHandle>,
    pub default_weight: f64,
    pub use_add: bool,
    pub add_threshold: f64,
    pub use_remove: bool,
    pub remove_threshold: f64,
    pub falloff_type: &'static str,
    pub normalize: bool,
    pub mask_constant: f64,
}

impl Default for VertexWeightEditSettings {
    fn default() -> Self {
        Self {
            vertex_group: None,
            default_weight: 0.0,
            use_add: false,
            add_threshold: 0.01,
            use_remove: false,
            remove_threshold: 0.01,
            falloff_type: "LINEAR",
            normalize: false,
            mask_constant: 1.0,
        }
    }
}

impl VertexWeightEditSettings {
    const MEMBERS: &'static [PropertyDescriptor] = &[
        PropertyDescriptor::property("vertex_group"),
        PropertyDescriptor::property("default_weight"),
        PropertyDescriptor::property("use_add"),
        PropertyDescriptor::property("add_threshold"),
        PropertyDescriptor::property("use_remove"),
        PropertyDescriptor::property("remove_threshold"),
        PropertyDescriptor::property("falloff_type"),
        PropertyDescriptor::property("normalize"),
        PropertyDescriptor::property("mask_constant"),
    ];

    fn read(&self, name: &str) -> Result<PropertyValue, PropertyError> {
        Ok(match name {
            "vertex_group" => self.vertex_group.into(),
            "default_weight" => PropertyValue::Float(self.default_weight),
            "use_add" => PropertyValue::Bool(self.use_add),
            "add_threshold" => PropertyValue::Float(self.add_threshold),
            "use_remove" => PropertyValue::Bool(self.use_remove),
            "remove_threshold" => PropertyValue::Float(self.remove_threshold),
            "falloff_type" => text(self.falloff_type),
            "normalize" => PropertyValue::Bool(self.normalize),
            "mask_constant" => PropertyValue::Float(self.mask_constant),
            _ => return Err(unknown(name)),
        })
    }

    fn write(&mut self, name: &str, value: &PropertyValue) -> Result<(), PropertyError> {
        match name {
            "vertex_group" => self.vertex_group = vertex_group_ref(name, value)?,
            "default_weight" => self.default_weight = value.as_float(name)?.clamp(0.0, 1.0),
            "use_add" => self.use_add = value.as_bool(name)?,
            "add_threshold" => self.add_threshold = value.as_float(name)?.clamp(0.0, 1.0),
            "use_remove" => self.use_remove = value.as_bool(name)?,
            "remove_threshold" => self.remove_threshold = value.as_float(name)?.clamp(0.0, 1.0),
            "falloff_type" => self.falloff_type = value.as_enum(name, WEIGHT_FALLOFF_TYPES)?,
            "normalize" => self.normalize = value.as_bool(name)?,
            "mask_constant" => self.mask_constant = value.as_float(name)?.clamp(0.0, 1.0),
            _ => return Err(unknown(name)),
        }
        Ok(())
    }
}

// ============================================================================
// Data transfer
// ============================================================================

const DATA_TYPES_VERTS: &[&str] = &["VGROUP_WEIGHTS", "BEVEL_WEIGHT_VERT"];
const VERT_MAPPINGS: &[&str] = &[
    "TOPOLOGY",
    "NEAREST",
    "EDGE_NEAREST",
    "EDGEINTERP_NEAREST",
    "POLY_NEAREST",
    "POLYINTERP_NEAREST",
    "POLYINTERP_VNORPROJ",
];
const MIX_MODES: &[&str] = &[
    "REPLACE",
    "ABOVE_THRESHOLD",
    "BELOW_THRESHOLD",
    "MIX",
    "ADD",
    "SUB",
    "MUL",
];

#[derive(Debug, Clone, PartialEq)]
pub struct DataTransferSettings {
    pub object: Option<DataHandle>,
    pub use_object_transform: bool,
    pub use_vert_data: bool,
    pub data_types_verts: BTreeSet<String>,
    pub vert_mapping: &'static str,
    pub mix_mode: &'static str,
    pub mix_factor: f64,
}

impl Default for DataTransferSettings {
    fn default() -> Self {
        Self {
            object: None,
            use_object_transform: true,
            use_vert_data: false,
            data_types_verts: BTreeSet::new(),
            vert_mapping: "NEAREST",
            mix_mode: "REPLACE",
            mix_factor: 1.0,
        }
    }
}

impl DataTransferSettings {
    const MEMBERS: &'static [PropertyDescriptor] = &[
        PropertyDescriptor::property("object"),
        PropertyDescriptor::property("use_object_transform"),
        PropertyDescriptor::property("use_vert_data"),
        PropertyDescriptor::property("data_types_verts"),
        PropertyDescriptor::property("vert_mapping"),
        PropertyDescriptor::property("mix_mode"),
        PropertyDescriptor::property("mix_factor"),
    ];

    fn read(&self, name: &str) -> Result<PropertyValue, PropertyError> {
        Ok(match name {
            "object" => self.object.into(),
            "use_object_transform" => PropertyValue::Bool(self.use_object_transform),
            "use_vert_data" => PropertyValue::Bool(self.use_vert_data),
            "data_types_verts" => PropertyValue::Flags(self.data_types_verts.clone()),
            "vert_mapping" => text(self.vert_mapping),
            "mix_mode" => text(self.mix_mode),
            "mix_factor" => PropertyValue::Float(self.mix_factor),
            _ => return Err(unknown(name)),
        })
    }

    fn write(&mut self, name: &str, value: &PropertyValue) -> Result<(), PropertyError> {
        match name {
            "object" => self.object = object_ref(name, value)?,
            "use_object_transform" => self.use_object_transform = value.as_bool(name)?,
            "use_vert_data" => self.use_vert_data = value.as_bool(name)?,
            "data_types_verts" => {
                self.data_types_verts = value.as_flags(name, DATA_TYPES_VERTS)?
            }
            "vert_mapping" => self.vert_mapping = value.as_enum(name, VERT_MAPPINGS)?,
            "mix_mode" => self.mix_mode = value.as_enum(name, MIX_MODES)?,
            "mix_factor" => self.mix_factor = value.as_float(name)?.clamp(0.0, 1.0),
            _ => return Err(unknown(name)),
        }
        Ok(())
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Type-specific settings of a modifier.
#[derive(Debug, Clone, PartialEq)]
pub enum ModifierSettings {
    Array(ArraySettings),
    Bevel(BevelSettings),
    Mirror(MirrorSettings),
    Subsurf(SubsurfSettings),
    Solidify(SolidifySettings),
    Armature(ArmatureSettings),
    Displace(DisplaceSettings),
    VertexWeightEdit(VertexWeightEditSettings),
    DataTransfer(DataTransferSettings),
}

impl ModifierSettings {
    /// Default settings for a freshly added modifier of `modifier_type`.
    pub fn new(modifier_type: ModifierType) -> Self {
        match modifier_type {
            ModifierType::Array => Self::Array(ArraySettings::default()),
            ModifierType::Bevel => Self::Bevel(BevelSettings::default()),
            ModifierType::Mirror => Self::Mirror(MirrorSettings::default()),
            ModifierType::Subsurf => Self::Subsurf(SubsurfSettings::default()),
            ModifierType::Solidify => Self::Solidify(SolidifySettings::default()),
            ModifierType::Armature => Self::Armature(ArmatureSettings::default()),
            ModifierType::Displace => Self::Displace(DisplaceSettings::default()),
            ModifierType::VertexWeightEdit => {
                Self::VertexWeightEdit(VertexWeightEditSettings::default())
            }
            ModifierType::DataTransfer => Self::DataTransfer(DataTransferSettings::default()),
        }
    }

    pub fn modifier_type(&self) -> ModifierType {
        match self {
            Self::Array(_) => ModifierType::Array,
            Self::Bevel(_) => ModifierType::Bevel,
            Self::Mirror(_) => ModifierType::Mirror,
            Self::Subsurf(_) => ModifierType::Subsurf,
            Self::Solidify(_) => ModifierType::Solidify,
            Self::Armature(_) => ModifierType::Armature,
            Self::Displace(_) => ModifierType::Displace,
            Self::VertexWeightEdit(_) => ModifierType::VertexWeightEdit,
            Self::DataTransfer(_) => ModifierType::DataTransfer,
        }
    }

    pub fn members(&self) -> &'static [PropertyDescriptor] {
        match self {
            Self::Array(_) => ArraySettings::MEMBERS,
            Self::Bevel(_) => BevelSettings::MEMBERS,
            Self::Mirror(_) => MirrorSettings::MEMBERS,
            Self::Subsurf(_) => SubsurfSettings::MEMBERS,
            Self::Solidify(_) => SolidifySettings::MEMBERS,
            Self::Armature(_) => ArmatureSettings::MEMBERS,
            Self::Displace(_) => DisplaceSettings::MEMBERS,
            Self::VertexWeightEdit(_) => VertexWeightEditSettings::MEMBERS,
            Self::DataTransfer(_) => DataTransferSettings::MEMBERS,
        }
    }

    pub fn read(&self, name: &str) -> Result<PropertyValue, PropertyError> {
        match self {
            Self::Array(s) => s.read(name),
            Self::Bevel(s) => s.read(name),
            Self::Mirror(s) => s.read(name),
            Self::Subsurf(s) => s.read(name),
            Self::Solidify(s) => s.read(name),
            Self::Armature(s) => s.read(name),
            Self::Displace(s) => s.read(name),
            Self::VertexWeightEdit(s) => s.read(name),
            Self::DataTransfer(s) => s.read(name),
        }
    }

    pub fn write(&mut self, name: &str, value: &PropertyValue) -> Result<(), PropertyError> {
        match self {
            Self::Array(s) => s.write(name, value),
            Self::Bevel(s) => s.write(name, value),
            Self::Mirror(s) => s.write(name, value),
            Self::Subsurf(s) => s.write(name, value),
            Self::Solidify(s) => s.write(name, value),
            Self::Armature(s) => s.write(name, value),
            Self::Displace(s) => s.write(name, value),
            Self::VertexWeightEdit(s) => s.write(name, value),
            Self::DataTransfer(s) => s.write(name, value),
        }
    }
}
