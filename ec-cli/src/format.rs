use clap::ValueEnum;
use ec_core::prelude::*;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PodSummary {
    pub name: String,
    pub namespace: String,
    pub ephemeral_containers: Vec<String>,
}

impl From<&corev1::Pod> for PodSummary {
    fn from(pod: &corev1::Pod) -> Self {
        PodSummary {
            name: pod.name_any(),
            namespace: pod.namespace().unwrap_or_default(),
            ephemeral_containers: pod.ephemeral_container_names(),
        }
    }
}

const TABLE_HEADERS: [&str; 3] = ["NAME", "NAMESPACE", "EPHEMERAL CONTAINERS"];

/// Render the pod listing in the requested format, or `None` when there is
/// nothing to show (the caller decides how to report that).
pub fn format_pod_list(format: OutputFormat, pods: &[corev1::Pod]) -> anyhow::Result<Option<String>> {
    if pods.is_empty() {
        return Ok(None);
    }

    let summaries = pods.iter().map(PodSummary::from).collect::<Vec<_>>();
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&summaries)?,
        OutputFormat::Yaml => serde_yaml::to_string(&summaries)?,
        OutputFormat::Table => render_table(&summaries),
    };
    Ok(Some(output))
}

// kubectl-style columns: whitespace-separated, sized to the longest cell
fn render_table(summaries: &[PodSummary]) -> String {
    let mut rows = vec![TABLE_HEADERS.map(String::from)];
    rows.extend(
        summaries
            .iter()
            .map(|s| [s.name.clone(), s.namespace.clone(), s.ephemeral_containers.join(",")]),
    );

    let widths = rows.iter().fold([0usize; 3], |mut acc, row| {
        for (width, cell) in acc.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
        acc
    });

    rows.iter()
        .map(|[name, namespace, containers]| {
            format!("{name:<w0$}   {namespace:<w1$}   {containers}", w0 = widths[0], w1 = widths[1])
        })
        .collect::<Vec<_>>()
        .join("\n")
}
