//! Checklist marking and merge checklists
//!
//! The "Cambios realizados" section is never trusted to the generator. It is
//! rebuilt from a fixed per-profile template, with items pre-checked when the
//! diff statistics mention files they are associated with.

use std::fmt;

use crate::core::project::ProjectProfile;

/// A single checklist line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub label: String,
    pub checked: bool,
}

impl fmt::Display for ChecklistItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.checked { 'x' } else { ' ' };
        write!(f, "- [{}] {}", mark, self.label)
    }
}

/// Template entry: label plus lowercase substrings that check it
type TemplateItem = (&'static str, &'static [&'static str]);

pub const TEMPLATE_LARAVEL: &[TemplateItem] = &[
    (
        "Nuevos endpoints o cambios en controladores",
        &["controller", "routes/"],
    ),
    (
        "Modificación de la base de datos (nueva migración)",
        &["migration"],
    ),
    ("Actualización de pruebas unitarias e integración", &["test"]),
];

pub const TEMPLATE_PYTHON: &[TemplateItem] = &[
    (
        "Actualización de dependencias (requirements.txt / pyproject.toml)",
        &["requirements", "pyproject", "pipfile", "setup.py"],
    ),
    ("Cambios en la lógica principal (módulos .py)", &[".py"]),
    ("Actualización de pruebas (tests/)", &["test"]),
];

pub const TEMPLATE_DOLIBARR: &[TemplateItem] = &[
    (
        "Cambios en clases o módulos (class/, core/modules/)",
        &["class/", ".class.php", "core/modules"],
    ),
    (
        "Modificación de la base de datos (scripts sql/)",
        &["sql/", ".sql"],
    ),
    ("Actualización de traducciones (langs/)", &["langs/", ".lang"]),
];

pub const TEMPLATE_GENERIC: &[TemplateItem] = &[("Cambios generales en el código", &[])];

/// Template for a profile
pub fn template_for(profile: ProjectProfile) -> &'static [TemplateItem] {
    match profile {
        ProjectProfile::Laravel => TEMPLATE_LARAVEL,
        ProjectProfile::Python => TEMPLATE_PYTHON,
        ProjectProfile::Dolibarr => TEMPLATE_DOLIBARR,
        ProjectProfile::Generic => TEMPLATE_GENERIC,
    }
}

/// Build the checklist for a profile, checking every item whose
/// substrings appear (case-insensitively) in the diff statistics
pub fn mark_checklist(profile: ProjectProfile, diff_stats: &str) -> Vec<ChecklistItem> {
    let haystack = diff_stats.to_lowercase();

    template_for(profile)
        .iter()
        .map(|(label, needles)| ChecklistItem {
            label: label.to_string(),
            checked: needles.iter().any(|needle| haystack.contains(needle)),
        })
        .collect()
}

/// Render checklist items one per line
pub fn render_checklist(items: &[ChecklistItem]) -> String {
    items
        .iter()
        .map(ChecklistItem::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Heading of the merge checklist block
pub const MERGE_CHECKLIST_HEADING: &str = "## ✅ Checklist antes de hacer merge";

/// Fixed manual-review reminders appended to every document
pub fn merge_checklist(profile: ProjectProfile) -> String {
    let items: &[&str] = match profile {
        ProjectProfile::Laravel => &[
            "- [x] Código probado localmente",
            "- [ ] Pruebas unitarias pasan (`php artisan test`)",
            "- [ ] Migraciones ejecutadas sin errores (`php artisan migrate`)",
            "- [ ] Revisado por al menos 1 desarrollador",
        ],
        ProjectProfile::Python => &[
            "- [x] Código probado localmente",
            "- [ ] Pruebas pasan (`pytest`)",
            "- [ ] Dependencias actualizadas en el entorno virtual",
            "- [ ] Revisado por al menos 1 desarrollador",
        ],
        ProjectProfile::Dolibarr => &[
            "- [x] Código probado localmente",
            "- [ ] Módulo activado y desactivado sin errores",
            "- [ ] Permisos y menús verificados",
            "- [ ] Revisado por al menos 1 desarrollador",
        ],
        ProjectProfile::Generic => &[
            "- [x] Código probado localmente",
            "- [ ] Pruebas pasan",
            "- [ ] Revisado por al menos 1 desarrollador",
        ],
    };

    format!("{}\n{}", MERGE_CHECKLIST_HEADING, items.join("\n"))
}
