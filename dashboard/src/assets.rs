//! Static assets: stylesheet and client script.

/// Returns the complete CSS stylesheet.
#[must_use]
pub fn style_css() -> &'static str {
    include_str!("../static/css/style.css")
}

/// Returns the client script.
///
/// The script reads the embedded chart specs and citation index, draws each
/// spec whose canvas exists with Chart.js, and opens the source modal for any
/// element carrying `data-citation`. Escape, the close button, and a click on
/// the backdrop close it.
#[must_use]
pub fn dashboard_js() -> &'static str {
    r#"// Ansan childcare audit dashboard client
// Draws precomputed chart specs and toggles the source modal.

(function () {
  'use strict';

  function readJson(id, fallback) {
    var el = document.getElementById(id);
    if (!el) return fallback;
    try {
      return JSON.parse(el.textContent);
    } catch (e) {
      console.error('Failed to parse ' + id + ':', e);
      return fallback;
    }
  }

  // Centre overlay, placed from the chart area on every draw so it follows
  // resizes and legend layout changes.
  var centerText = {
    id: 'centerText',
    afterDraw: function (chart, args, options) {
      if (!options || !options.value) return;
      var area = chart.chartArea;
      var ctx = chart.ctx;
      var x = (area.left + area.right) / 2;
      var y = (area.top + area.bottom) / 2;
      ctx.save();
      ctx.textAlign = 'center';
      ctx.textBaseline = 'middle';
      ctx.font = 'bold 2rem sans-serif';
      ctx.fillStyle = options.color;
      ctx.fillText(options.value, x, y - 10);
      ctx.font = '0.9rem sans-serif';
      ctx.fillStyle = '#94a3b8';
      ctx.fillText(options.caption, x, y + 20);
      ctx.restore();
    }
  };

  function toDataset(spec, series) {
    var style = series.style;
    var color = style.colors.length === 1 ? style.colors[0] : style.colors;
    var ds = {
      label: series.name,
      data: series.values,
      borderColor: color,
      backgroundColor: style.fill || color
    };
    if (style.fill) ds.fill = true;
    if (style.tension !== null) ds.tension = style.tension;
    if (style.dash) ds.borderDash = style.dash;
    if (style.axis) ds.yAxisID = style.axis;
    if (style.border_radius !== null) ds.borderRadius = style.border_radius;
    if (spec.draw === 'doughnut') ds.borderWidth = 0;
    return ds;
  }

  function toScales(spec) {
    var scales = {};
    spec.axes.forEach(function (axis) {
      var scale = {
        position: axis.position,
        beginAtZero: axis.begin_at_zero,
        grid: { drawOnChartArea: axis.grid },
        title: { display: axis.title !== null, text: axis.title || '' }
      };
      if (axis.min !== null) scale.min = axis.min;
      if (axis.max !== null) scale.max = axis.max;
      scales[axis.id] = scale;
    });
    return scales;
  }

  function toConfig(spec) {
    var tooltip = spec.tooltip;
    var options = {
      responsive: true,
      maintainAspectRatio: false,
      indexAxis: spec.orientation === 'horizontal' ? 'y' : 'x',
      plugins: {
        legend: {
          display: spec.legend !== 'hidden',
          position: spec.legend === 'hidden' ? 'top' : spec.legend
        },
        tooltip: {
          callbacks: {}
        }
      }
    };
    if (tooltip.labels.length) {
      options.plugins.tooltip.callbacks.label = function (ctx) {
        return tooltip.labels[ctx.dataIndex];
      };
    }
    if (tooltip.after_labels.length) {
      options.plugins.tooltip.callbacks.afterLabel = function (ctx) {
        return tooltip.after_labels[ctx.dataIndex] || '';
      };
    }
    if (spec.axes.length) options.scales = toScales(spec);
    if (spec.cutout !== null) options.cutout = spec.cutout + '%';
    if (spec.overlay) options.plugins.centerText = spec.overlay;

    return {
      type: spec.draw,
      data: {
        labels: spec.labels,
        datasets: spec.series.map(function (s) { return toDataset(spec, s); })
      },
      options: options,
      plugins: spec.overlay ? [centerText] : []
    };
  }

  function drawCharts(specs) {
    if (typeof Chart === 'undefined') {
      console.error('Chart.js is not loaded; charts skipped.');
      return;
    }
    specs.forEach(function (spec) {
      var canvas = document.getElementById(spec.mount);
      if (!canvas) return;
      new Chart(canvas, toConfig(spec));
    });
  }

  var citations = readJson('citation-index', {});
  var modal = document.getElementById('source-modal');
  var modalTitle = document.getElementById('modal-title');
  var modalBody = document.getElementById('modal-body');

  function showSource(key) {
    var entry = citations[key];
    if (!entry) {
      console.error('Unknown citation key:', key);
      return;
    }
    if (!modal) return;
    if (modalTitle) modalTitle.textContent = entry.title;
    if (modalBody) modalBody.innerHTML = entry.html;
    modal.classList.add('active');
    document.body.style.overflow = 'hidden';
  }

  function closeModal() {
    if (!modal) return;
    modal.classList.remove('active');
    document.body.style.overflow = '';
  }

  document.addEventListener('click', function (e) {
    var trigger = e.target.closest('[data-citation]');
    if (trigger) {
      e.preventDefault();
      showSource(trigger.getAttribute('data-citation'));
      return;
    }
    if (e.target === modal || e.target.closest('.modal-close')) {
      closeModal();
    }
  });

  document.addEventListener('keydown', function (e) {
    if (e.key === 'Escape') closeModal();
  });

  drawCharts(readJson('chart-specs', []));
}());
"#
}
