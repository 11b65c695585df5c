use chrono::SecondsFormat;

use backend_domain::ScanEvent;

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>QR scans</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<style>
body { font-family: sans-serif; margin: 0; padding: 1rem; }
#map { height: 60vh; margin-bottom: 1rem; }
table { border-collapse: collapse; width: 100%; }
th, td { border-bottom: 1px solid #ddd; padding: 0.4rem; text-align: left; }
</style>
</head>
<body>
"#;

const TABLE_HEAD: &str = r#"<div id="map"></div>
<table>
<thead><tr><th>User</th><th>QR data</th><th>Latitude</th><th>Longitude</th><th>Time (UTC)</th></tr></thead>
<tbody>
"#;

const SCRIPT_HEAD: &str = r#"</tbody>
</table>
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<script>
const scans = "#;

const SCRIPT_TAIL: &str = r#";
const map = L.map('map');
L.tileLayer('https://tile.openstreetmap.org/{z}/{x}/{y}.png', {
  maxZoom: 19,
  attribution: '&copy; OpenStreetMap contributors'
}).addTo(map);
const points = [];
for (const scan of scans) {
  const point = [scan.location.lat, scan.location.lng];
  points.push(point);
  const popup = document.createElement('div');
  popup.textContent = (scan.username ?? 'anonymous') + ': ' + scan.qr_data + ' (' + scan.time + ')';
  L.marker(point).addTo(map).bindPopup(popup);
}
if (points.length > 0) {
  map.fitBounds(points, { padding: [24, 24], maxZoom: 16 });
} else {
  map.setView([0, 0], 2);
}
</script>
</body>
</html>
"#;

/// Renders the scan map: a Leaflet map with one marker per scan and a table
/// listing every scan.
pub fn render(scans: &[ScanEvent]) -> serde_json::Result<String> {
    let data = script_json(scans)?;

    let mut page = String::with_capacity(HEAD.len() + SCRIPT_TAIL.len() + data.len() * 2);
    page.push_str(HEAD);
    page.push_str(&format!("<h1>QR scans ({})</h1>\n", scans.len()));
    page.push_str(TABLE_HEAD);
    for scan in scans {
        page.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(scan.username.as_deref().unwrap_or("anonymous")),
            escape_html(&scan.qr_data),
            scan.location.lat,
            scan.location.lng,
            scan.time.to_rfc3339_opts(SecondsFormat::Secs, true),
        ));
    }
    page.push_str(SCRIPT_HEAD);
    page.push_str(&data);
    page.push_str(SCRIPT_TAIL);
    Ok(page)
}

/// JSON for inline `<script>` use. `<`, `>` and `&` only occur inside JSON
/// strings, where their `\u` escapes are equivalent.
fn script_json(scans: &[ScanEvent]) -> serde_json::Result<String> {
    let json = serde_json::to_string(scans)?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
