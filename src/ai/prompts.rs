//! Prompt templates for AI generation

use crate::core::git::CommitBatch;
use crate::core::project::ProjectProfile;

/// Placeholder interpolated in place of empty inputs
const NO_DATA: &str = "(sin datos)";

fn or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() {
        NO_DATA
    } else {
        value
    }
}

/// Generate the prompt for the PR description narrative
///
/// The generator is asked for the four narrative sections only. The changes
/// checklist and the merge checklist are built locally and appended later.
pub fn pr_description_prompt(
    commit_log: &str,
    diff_stats: &str,
    profile_name: &str,
    branch_name: &str,
    commit_count: usize,
) -> String {
    let commit_log = or_placeholder(commit_log);
    let diff_stats = or_placeholder(diff_stats);
    let branch_name = or_placeholder(branch_name);

    format!(
        r#"Sos un desarrollador senior con experiencia en proyectos {profile_name}. Tenés que redactar la descripción de un Pull Request en español a partir de los últimos {commit_count} commit(s) de la rama `{branch_name}`.

Resumen de commits:
{commit_log}

Estadísticas de cambios (git diff --stat):
{diff_stats}

Reglas de formato:
- NO saludes ni te despidas, NO expliques lo que hacés: respondé solo con el contenido del PR.
- NO uses líneas separadoras como "-----" o "=====".
- NO uses listas de verificación con casillas ("- [ ]" o "- [x]").
- Para las listas usá siempre guiones simples ("- elemento"), nunca asteriscos.
- Escribí oraciones completas, con contexto suficiente. No seas breve.

Estructura obligatoria (respetá exactamente estos títulos y este orden):

## Resumen del cambio
Explicá qué cambios se realizaron y por qué.

## ¿Qué problema soluciona?
Describí el problema o la funcionalidad que motivó el cambio y su impacto.

## ¿Cómo probarlo?
Enumerá los pasos concretos para verificar el cambio, usando los archivos modificados como guía.

## Consideraciones adicionales
Mencioná efectos colaterales, migraciones, configuración extra o riesgos. Si no hay, decilo en una oración.
"#
    )
}

/// Build the prompt for a collected batch of commits
pub fn prompt_for_batch(batch: &CommitBatch, profile: ProjectProfile) -> String {
    pr_description_prompt(
        &batch.render_log(),
        &batch.diff_stats,
        profile.name(),
        &batch.branch,
        batch.count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_interpolates_inputs_verbatim() {
        let prompt = pr_description_prompt(
            "- Add {braces} & <tags>",
            " app/Models/User.php | 3 +-",
            "laravel",
            "feature/login",
            2,
        );
        assert!(prompt.contains("- Add {braces} & <tags>"));
        assert!(prompt.contains(" app/Models/User.php | 3 +-"));
        assert!(prompt.contains("proyectos laravel"));
        assert!(prompt.contains("`feature/login`"));
        assert!(prompt.contains("últimos 2 commit(s)"));
    }

    #[test]
    fn test_prompt_has_required_sections_in_order() {
        let prompt = pr_description_prompt("- x", "y", "python", "main", 1);
        let positions: Vec<usize> = [
            "## Resumen del cambio",
            "## ¿Qué problema soluciona?",
            "## ¿Cómo probarlo?",
            "## Consideraciones adicionales",
        ]
        .iter()
        .map(|heading| prompt.find(heading).expect("missing section"))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!prompt.contains("## Cambios realizados"));
    }

    #[test]
    fn test_empty_inputs_use_placeholder() {
        let prompt = pr_description_prompt("", "  ", "generic", "", 1);
        assert_eq!(prompt.matches(NO_DATA).count(), 3);
    }
}
