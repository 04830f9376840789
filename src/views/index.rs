//! Lookup page: a `;`-separated input box and one result card per location.

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Weather Comfort Lookup</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            margin: 0;
            padding: 0;
            background: #f5f5f5;
            color: #333;
        }
        .container {
            max-width: 960px;
            margin: 40px auto;
            padding: 20px;
            background: #fff;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
            border-radius: 8px;
        }
        h1 { text-align: center; }
        nav { text-align: center; margin-bottom: 20px; }
        nav a { margin: 0 10px; color: #0066cc; }
        form { display: flex; gap: 8px; }
        input[type=text] { flex: 1; padding: 8px; font-size: 1em; }
        button { padding: 8px 16px; }
        .hint { color: #777; font-size: 0.9em; }
        .cards { display: flex; flex-wrap: wrap; gap: 12px; margin-top: 20px; }
        .card { flex: 1 1 260px; padding: 12px; border-radius: 6px; background: #eef5ff; }
        .card.error { background: #fdecea; }
        .card h2 { margin: 0 0 8px; font-size: 1.2em; }
        .card .query { color: #777; font-size: 0.85em; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Weather Comfort Lookup</h1>
        <nav><a href="/history">History</a></nav>
        <form id="lookup">
            <input type="text" id="cities" placeholder="Boston, MA; London, UK; Tokyo" autofocus>
            <button type="submit">Get weather</button>
        </form>
        <p class="hint">Separate locations with semicolons.</p>
        <p id="status"></p>
        <div class="cards" id="results"></div>
    </div>
    <script>
        function el(tag, text, className) {
            const node = document.createElement(tag);
            if (text !== undefined) node.textContent = text;
            if (className) node.className = className;
            return node;
        }

        function fixed(value, digits) {
            return typeof value === 'number' ? value.toFixed(digits) : 'N/A';
        }

        function card(entry) {
            const div = el('div', undefined, entry.error ? 'card error' : 'card');
            if (entry.error) {
                div.appendChild(el('h2', entry.original_input));
                div.appendChild(el('p', entry.error));
                return div;
            }
            const place = [entry.city_name, entry.state, entry.country_code].filter(Boolean).join(', ');
            div.appendChild(el('h2', place));
            div.appendChild(el('p', entry.weather_desc));
            div.appendChild(el('p', fixed(entry.temp_celsius, 1) + ' °C / ' + fixed(entry.temp_fahrenheit, 1) + ' °F'));
            div.appendChild(el('p', 'Humidity: ' + entry.humidity + '%'));
            div.appendChild(el('p', 'Wind: ' + fixed(entry.wind_speed, 1) + ' m/s'));
            const comfort = entry.comfort_index === null
                ? 'Comfort index: N/A'
                : 'Comfort index: ' + fixed(entry.comfort_index, 2) + ' (' + entry.comfort_level + ')';
            div.appendChild(el('p', comfort));
            div.appendChild(el('p', 'You searched: ' + entry.original_input, 'query'));
            return div;
        }

        document.getElementById('lookup').addEventListener('submit', async (event) => {
            event.preventDefault();
            const status = document.getElementById('status');
            const results = document.getElementById('results');
            const raw = document.getElementById('cities').value;
            results.replaceChildren();
            if (!raw.split(';').some((part) => part.trim())) {
                status.textContent = 'Please enter at least one location.';
                return;
            }
            status.textContent = 'Loading...';
            try {
                const response = await fetch('/get_weather', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ cities: [raw] })
                });
                const body = await response.json();
                if (!response.ok) {
                    status.textContent = body.error || ('Request failed: ' + response.status);
                    return;
                }
                status.textContent = '';
                body.weather_data.forEach((entry) => results.appendChild(card(entry)));
            } catch (error) {
                status.textContent = 'Error contacting the server: ' + error;
            }
        });
    </script>
</body>
</html>"#;
