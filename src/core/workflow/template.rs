/// Node name the patcher targets when `--node` is not given.
pub const DEFAULT_TARGET_NODE: &str = "Build Digest";

/// Built-in replacement body for the digest-builder code node.
///
/// The `\n` sequences inside the embedded template literals belong to the
/// injected code itself (two characters each), not to this file.
pub const BUILD_DIGEST_CODE: &str = r#"const meta = $('Aggregate Transcripts').first().json;
const msg = $json.choices && $json.choices[0] && $json.choices[0].message ? $json.choices[0].message : {};
// GLM-4.7-flash is a thinking model: final answer in content, chain-of-thought in reasoning_content
// Use content if non-empty, else fall back to reasoning_content
const rawContent = (msg.content || '').trim();
const rawReasoning = (msg.reasoning_content || '').trim();
const summaryText = rawContent || rawReasoning || 'Сводка не получена.';
const leadList = Array.isArray(meta.leadIds) && meta.leadIds.length > 0
  ? meta.leadIds.map((id) => `LEAD-${id}`).join(', ')
  : '—';
const header = `Ежедневный дайджест за ${meta.dateLabel}\nВстреч: ${meta.count}\nКлиенты: ${leadList}`;
const digest = `${header}\n\n${summaryText}`.trim();

return [{
  json: {
    digest,
    summaryText,
    rowIds: meta.rowIds
  }
}];"#;
