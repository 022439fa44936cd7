//! Static rename tables mapping pre-0.21 module paths to their 0.21 homes.
//!
//! FreeCAD 0.21 reorganized the CAM workbench: everything that used to live
//! in the flat `PathScripts` package moved under `Path.Op`, `Path.Dressup`,
//! `Path.Tool`, `Path.Main`, or `Path.Base`. Which table applies depends on
//! the payload being patched: `Document.xml` serializes object proxies,
//! `GuiDocument.xml` serializes view-provider proxies, and the two use
//! different (partly overlapping) sets of modules.
//!
//! Lookups are exact-match only. A miss is not an error; the caller records
//! a warning and leaves the reference alone, which is what makes running the
//! tool on an already-migrated file a no-op.

/// Which payload of the archive is being patched.
///
/// This selects both the XML section that holds the proxies and the rename
/// table used to translate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// `Document.xml`, top-level `<ObjectData>` section, object proxies.
    ObjectData,
    /// `GuiDocument.xml`, top-level `<ViewProviderData>` section,
    /// view-provider proxies.
    ViewProviderData,
}

impl SectionKind {
    /// Returns the archive entry name this section kind lives in.
    pub fn payload_name(self) -> &'static str {
        match self {
            SectionKind::ObjectData => "Document.xml",
            SectionKind::ViewProviderData => "GuiDocument.xml",
        }
    }

    /// Returns the name of the top-level XML section holding the proxies.
    pub fn section_name(self) -> &'static str {
        match self {
            SectionKind::ObjectData => "ObjectData",
            SectionKind::ViewProviderData => "ViewProviderData",
        }
    }

    /// Maps an archive entry name to the section kind that patches it, or
    /// `None` for entries that are copied through untouched.
    pub fn for_entry(name: &str) -> Option<SectionKind> {
        match name {
            "Document.xml" => Some(SectionKind::ObjectData),
            "GuiDocument.xml" => Some(SectionKind::ViewProviderData),
            _ => None,
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            SectionKind::ObjectData => OBJECT_MODULES,
            SectionKind::ViewProviderData => VIEW_PROVIDER_MODULES,
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.section_name())
    }
}

/// Looks up the 0.21 replacement for an old module path.
///
/// Returns `None` when the path has no entry in the table for `kind`; the
/// caller is expected to warn and keep the original reference.
pub fn lookup(kind: SectionKind, old_path: &str) -> Option<&'static str> {
    let table = kind.table();
    table
        .binary_search_by_key(&old_path, |&(old, _)| old)
        .ok()
        .map(|index| table[index].1)
}

// Both tables are sorted by old path for binary search; see the
// `tables_are_sorted` test.

/// Object proxy renames applied to `Document.xml`.
static OBJECT_MODULES: &[(&str, &str)] = &[
    ("PathScripts.PathAdaptive", "Path.Op.Adaptive"),
    ("PathScripts.PathComment", "Path.Op.Gui.Comment"),
    ("PathScripts.PathCustom", "Path.Op.Custom"),
    ("PathScripts.PathDeburr", "Path.Op.Deburr"),
    ("PathScripts.PathDressupDogbone", "Path.Dressup.DogboneII"),
    ("PathScripts.PathDressupHoldingTags", "Path.Dressup.Tags"),
    ("PathScripts.PathDrilling", "Path.Op.Drilling"),
    ("PathScripts.PathEngrave", "Path.Op.Engrave"),
    ("PathScripts.PathHelix", "Path.Op.Helix"),
    ("PathScripts.PathIconViewProvider", "Path.Base.Gui.IconViewProvider"),
    ("PathScripts.PathJob", "Path.Main.Job"),
    ("PathScripts.PathMillFace", "Path.Op.MillFace"),
    ("PathScripts.PathPocket", "Path.Op.Pocket"),
    ("PathScripts.PathPocketShape", "Path.Op.Pocket"),
    ("PathScripts.PathProbe", "Path.Op.Probe"),
    ("PathScripts.PathProfile", "Path.Op.Profile"),
    ("PathScripts.PathProfileContour", "Path.Op.Profile"),
    ("PathScripts.PathSetupSheet", "Path.Base.SetupSheet"),
    ("PathScripts.PathSlot", "Path.Op.Slot"),
    ("PathScripts.PathStock", "Path.Main.Stock"),
    ("PathScripts.PathSurface", "Path.Op.Surface"),
    ("PathScripts.PathThreadMilling", "Path.Op.ThreadMilling"),
    ("PathScripts.PathToolBit", "Path.Tool.Bit"),
    ("PathScripts.PathToolController", "Path.Tool.Controller"),
    ("PathScripts.PathVcarve", "Path.Op.Vcarve"),
    ("PathScripts.PathWaterline", "Path.Op.Waterline"),
];

/// View-provider proxy renames applied to `GuiDocument.xml`.
static VIEW_PROVIDER_MODULES: &[(&str, &str)] = &[
    ("PathScripts.PathAdaptiveGui", "Path.Op.Gui.Adaptive"),
    ("PathScripts.PathComment", "Path.Op.Gui.Comment"),
    ("PathScripts.PathCustomGui", "Path.Op.Gui.Custom"),
    ("PathScripts.PathDeburrGui", "Path.Op.Gui.Deburr"),
    ("PathScripts.PathDressupTagGui", "Path.Dressup.Gui.Tags"),
    ("PathScripts.PathDrillingGui", "Path.Op.Gui.Drilling"),
    ("PathScripts.PathEngraveGui", "Path.Op.Gui.Engrave"),
    ("PathScripts.PathHelixGui", "Path.Op.Gui.Helix"),
    ("PathScripts.PathIconViewProvider", "Path.Base.Gui.IconViewProvider"),
    ("PathScripts.PathJobGui", "Path.Main.Gui.Job"),
    ("PathScripts.PathMillFaceGui", "Path.Op.Gui.MillFace"),
    ("PathScripts.PathOpGui", "Path.Op.Gui.Base"),
    ("PathScripts.PathPocketGui", "Path.Op.Gui.Pocket"),
    ("PathScripts.PathPocketShapeGui", "Path.Op.Gui.Pocket"),
    ("PathScripts.PathProbeGui", "Path.Op.Gui.Probe"),
    ("PathScripts.PathProfileContourGui", "Path.Op.Gui.Profile"),
    ("PathScripts.PathProfileGui", "Path.Op.Gui.Profile"),
    ("PathScripts.PathSetupSheetGui", "Path.Base.Gui.SetupSheet"),
    ("PathScripts.PathSlotGui", "Path.Op.Gui.Slot"),
    ("PathScripts.PathSurfaceGui", "Path.Op.Gui.Surface"),
    ("PathScripts.PathToolBitGui", "Path.Tool.Gui.Bit"),
    ("PathScripts.PathToolControllerGui", "Path.Tool.Gui.Controller"),
    ("PathScripts.PathVcarveGui", "Path.Op.Gui.Vcarve"),
    ("PathScripts.PathWaterlineGui", "Path.Op.Gui.Waterline"),
];
