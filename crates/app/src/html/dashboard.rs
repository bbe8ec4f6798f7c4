pub const DASHBOARD_STYLE: &str = r#"
  body {
    margin: 0;
    font-family: "Open Sans", "Helvetica Neue", Helvetica, Arial, sans-serif;
    background: #f2f2f2;
    color: #2a3f5f;
  }
  .header {
    padding: 1.5rem 2rem 1rem;
    background: #1e3a5f;
    color: #f8fafc;
  }
  .header__text {
    margin: 0 0 0.4rem;
    font-size: 1.8rem;
  }
  section {
    padding: 1rem 2rem 2rem;
  }
  #platforms_links {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
  }
  .teammate {
    display: flex;
    align-items: center;
    gap: 0.4rem;
  }
  .teammate img {
    border-radius: 50%;
    object-fit: cover;
    background: #cbd5e1;
  }
  #itinerary-dropdown {
    width: 100%;
    max-width: 48rem;
    padding: 0.45rem;
    font-size: 1rem;
  }
  #kpis {
    display: flex;
    gap: 1rem;
    margin-top: 1rem;
  }
  .mini_container {
    flex: 1;
    padding: 1rem;
    border-radius: 6px;
    background: #f9f9f9;
    box-shadow: 2px 2px 2px lightgrey;
    font-size: 1.2rem;
    text-align: center;
  }
  #graph_line {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    margin-top: 1rem;
  }
  #graph_line .graph {
    flex: 1 1 28rem;
    min-height: 420px;
  }
  .stale {
    opacity: 0.6;
  }
"#;

/// Page-side binding: one change handler feeding the four output slots.
pub const DASHBOARD_SCRIPT: &str = r#"
(function () {
  const dropdown = document.getElementById("itinerary-dropdown");
  const slots = {
    kpi_1: document.getElementById("kpi_1"),
    kpi_2: document.getElementById("kpi_2"),
    map: document.getElementById("bike-map"),
    chart: document.getElementById("histo-km"),
  };
  let current = null;

  function renderKpi(el, kpi) {
    el.textContent = "";
    el.append(" " + kpi.label, document.createElement("br"), String(kpi.value));
  }

  function apply(update) {
    renderKpi(slots.kpi_1, update.kpis.total_distance_km);
    renderKpi(slots.kpi_2, update.kpis.day_count);
    if (window.Plotly) {
      Plotly.react(slots.map, update.map.data, update.map.layout, { scrollZoom: false });
      Plotly.react(slots.chart, update.chart.data, update.chart.layout);
    }
    current = update.itinerary;
    dropdown.value = current;
    document.body.classList.remove("stale");
  }

  async function select(id) {
    try {
      const response = await fetch("/api/selection/" + encodeURIComponent(id));
      if (!response.ok) {
        const body = await response.json().catch(() => ({}));
        throw new Error(body.error || response.statusText);
      }
      apply(await response.json());
    } catch (err) {
      console.warn("keeping itinerary", current, "after failed selection", id, err);
      if (current) {
        dropdown.value = current;
      }
    }
  }

  dropdown.addEventListener("change", (event) => {
    document.body.classList.add("stale");
    select(event.target.value).finally(() => document.body.classList.remove("stale"));
  });

  const initial = document.getElementById("initial-selection");
  if (initial) {
    apply(JSON.parse(initial.textContent));
  } else {
    select(dropdown.value);
  }
})();
"#;
