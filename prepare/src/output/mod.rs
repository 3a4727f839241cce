use std::fs;
use std::path::Path;

use crate::error::PrepareError;
use crate::tables::planes::PlaneEncoding;
use crate::tables::properties::{CharacterPlane, InternedIndices};
use crate::tables::scripts::ScriptPlane;
use crate::tables::PreparedTables;

use self::format::{format_num, format_num_vec, format_ranges, format_str_vec};

pub mod format;
pub mod stats;

/// длина строки в файле с подготовленными данными
pub const FORMAT_STRING_LENGTH: usize = 120;

/// параметры записи
#[derive(Debug, Clone)]
pub struct OutputSettings
{
    pub line_width: usize,
    /// версия Unicode для комментария в начале файла
    pub unicode_version: Option<String>,
}

impl Default for OutputSettings
{
    fn default() -> Self
    {
        Self {
            line_width: FORMAT_STRING_LENGTH,
            unicode_version: None,
        }
    }
}

/// данные в виде выражения Rust, которое подключается через include!
pub fn render(tables: &PreparedTables, settings: &OutputSettings) -> String
{
    let width = settings.line_width;

    let header = match &settings.unicode_version {
        Some(version) => format!("// Unicode {}\n", version),
        None => String::new(),
    };

    let character_planes: String = tables
        .properties
        .planes
        .iter()
        .map(|plane| character_plane(plane, width))
        .collect();

    let script_planes: String = tables
        .scripts
        .planes
        .iter()
        .map(|plane| script_plane(plane, width))
        .collect();

    format!(
        "{}UnicodeData {{\n  \
            characters: CharacterData {{\n    \
                values: &[{}    ],\n    \
                latin1: {},\n    \
                planes: [\n{}    ],\n    \
                lowercase_deltas: &[{}    ],\n    \
                uppercase_deltas: &[{}    ],\n  \
            }},\n  \
            scripts: ScriptData {{\n    \
                names: &[{}    ],\n    \
                latin1: &[{}    ],\n    \
                planes: [\n{}    ],\n  \
            }},\n\
        }}\n",
        header,
        format_num_vec(&tables.properties.values, width),
        interned(&tables.properties.latin1, width),
        character_planes,
        format_ranges(&tables.case_deltas.lowercase, width, |delta: i32| delta.to_string()),
        format_ranges(&tables.case_deltas.uppercase, width, |delta: i32| delta.to_string()),
        format_str_vec(&tables.scripts.names, width),
        format_num_vec(&tables.scripts.latin1, width),
        script_planes,
    )
}

/// записать данные в файл. файл пишется целиком после того, как всё подготовлено
pub fn write(tables: &PreparedTables, path: &Path, settings: &OutputSettings) -> Result<(), PrepareError>
{
    let output = render(tables, settings);

    let io_error = |source| PrepareError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
    }

    let len = output.len();
    fs::write(path, output).map_err(io_error)?;

    info!("записано: {} ({} байт)", path.display(), len);

    Ok(())
}

fn interned(data: &InternedIndices, width: usize) -> String
{
    match data {
        InternedIndices::Narrow(data) => format!("Interned::Narrow(&[{}    ])", format_num_vec(data, width)),
        InternedIndices::Wide(data) => format!("Interned::Wide(&[{}    ])", format_num_vec(data, width)),
    }
}

fn character_plane(plane: &CharacterPlane, width: usize) -> String
{
    match &plane.encoding {
        PlaneEncoding::Table(table) => format!(
            "      // {}\n      \
            PlaneData::Table(LookupTable {{\n        \
                block_bits: {},\n        \
                index: &[{}        ],\n        \
                data: {},\n      \
            }}),\n",
            plane.plane.name,
            table.block_bits,
            format_num_vec(&table.index, width),
            interned(&table.data, width),
        ),
        PlaneEncoding::Ranges(ranges) => format!(
            "      // {}\n      PlaneData::Ranges(&[{}      ]),\n",
            plane.plane.name,
            format_ranges(ranges, width, |value| format_num(u64::from(value))),
        ),
    }
}

fn script_plane(plane: &ScriptPlane, width: usize) -> String
{
    match &plane.encoding {
        PlaneEncoding::Table(table) => format!(
            "      // {}\n      \
            ScriptPlaneData::Table(LookupTable {{\n        \
                block_bits: {},\n        \
                index: &[{}        ],\n        \
                data: &[{}        ],\n      \
            }}),\n",
            plane.plane.name,
            table.block_bits,
            format_num_vec(&table.index, width),
            format_num_vec(&table.data, width),
        ),
        PlaneEncoding::Ranges(ranges) => format!(
            "      // {}\n      ScriptPlaneData::Ranges(&[{}      ]),\n",
            plane.plane.name,
            format_ranges(ranges, width, |value| format_num(u64::from(value))),
        ),
    }
}
