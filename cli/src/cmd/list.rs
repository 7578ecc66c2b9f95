use dropfromshell::entry::Entry;
use dropfromshell::Client;

#[derive(Default)]
struct ColumnWidths {
    kind: usize,
    size: usize,
    modified: usize,
}

impl ColumnWidths {
    fn from_iter<'a>(iter: impl Iterator<Item = &'a EntryLine<'a>>) -> Self {
        iter.fold(Self::default(), |mut res, item| {
            res.kind = res.kind.max(item.kind.len());
            res.size = res.size.max(item.size.len());
            res.modified = res.modified.max(item.modified.len());
            res
        })
    }
}

struct EntryLine<'a> {
    kind: &'a str,
    size: String,
    modified: String,
    name: &'a str,
}

impl<'a> From<&'a Entry> for EntryLine<'a> {
    fn from(entry: &'a Entry) -> Self {
        Self {
            kind: entry.tag.as_str(),
            size: entry
                .size
                .map(|value| value.to_string())
                .unwrap_or_else(|| "-".into()),
            modified: entry
                .server_modified
                .map(|value| value.to_rfc3339())
                .unwrap_or_else(|| "-".into()),
            name: entry.name.as_str(),
        }
    }
}

fn write(mut entries: Vec<Entry>) {
    entries.sort();
    let lines = entries.iter().map(EntryLine::from).collect::<Vec<_>>();
    let column_widths = ColumnWidths::from_iter(lines.iter());
    for line in lines {
        println!(
            "{:<kw$}  {:>sw$}  {:mw$}  {}",
            line.kind,
            line.size,
            line.modified,
            line.name,
            kw = column_widths.kind,
            sw = column_widths.size,
            mw = column_widths.modified,
        );
    }
}

#[derive(clap::Parser)]
pub(crate) struct Command {
    /// Remote folder to list, the root folder by default
    #[clap(default_value = dropfromshell::folder::ROOT)]
    path: String,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(self, client: &Client) -> anyhow::Result<()> {
        tracing::info!("listing folder {:?}", self.path);
        let entries = client.list_folder(&self.path).await?;
        write(entries);
        Ok(())
    }
}
