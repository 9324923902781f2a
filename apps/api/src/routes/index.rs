use axum::response::Html;

/// GET /
/// Serves the mock-interview page. The page is compiled in — there is no
/// templating engine and no static asset directory to configure.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>AI Mock Interview</title>
  <style>
    body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }
    select, button, textarea { font-size: 1rem; margin: 0.25rem 0; }
    #feedback { white-space: pre-wrap; background: #f4f4f4; padding: 1rem; }
  </style>
</head>
<body>
  <h1>AI Mock Interview</h1>
  <label>Role
    <select id="role">
      <option>Data Scientist</option>
      <option>Software Engineer</option>
      <option>AI/ML Engineer</option>
    </select>
  </label>
  <label>Interview type
    <select id="type">
      <option>Technical</option>
      <option>HR</option>
      <option>Behavioral</option>
    </select>
  </label>
  <ol id="questions"></ol>
  <textarea id="answer" rows="4" cols="60" placeholder="Type your answer"></textarea>
  <button id="submit">Submit interview</button>
  <div id="feedback"></div>
  <script>
    const roleSelect = document.getElementById("role");
    const answers = [];

    async function loadQuestions() {
      const role = encodeURIComponent(roleSelect.value);
      const res = await fetch(`/questions/${role}`);
      const data = await res.json();
      const list = document.getElementById("questions");
      list.innerHTML = "";
      for (const q of data.questions) {
        const li = document.createElement("li");
        li.textContent = q;
        list.appendChild(li);
      }
    }

    roleSelect.addEventListener("change", loadQuestions);
    loadQuestions();

    document.getElementById("submit").addEventListener("click", async () => {
      answers.push(document.getElementById("answer").value);
      const res = await fetch("/analyze", {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify({
          role: roleSelect.value,
          type: document.getElementById("type").value,
          answers,
        }),
      });
      const result = await res.json();
      document.getElementById("feedback").textContent =
        `Pitch: ${result.pitch}\nConfidence: ${result.confidence}\n` +
        `Nervousness: ${result.nervousness}\n\n${result.summary}`;
    });
  </script>
</body>
</html>
"#;
