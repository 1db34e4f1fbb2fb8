//! Static pieces of the generated player document

/// Utility-class stylesheet loaded from a CDN; purely cosmetic
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub(crate) const TAILWIND_CONFIG: &str = "tailwind.config = { darkMode: 'class' };";

pub(crate) const BODY_CLASS: &str = "bg-slate-50 dark:bg-slate-900 text-slate-800 dark:text-slate-200 transition-colors duration-300";

pub(crate) const MAIN_CLASS: &str = "w-full max-w-3xl mx-auto p-4 sm:p-6 lg:p-8";

/// Inline CSS; `.hidden` is repeated here so the player works offline
pub(crate) const STYLE: &str = r#"
    body { -webkit-font-smoothing: antialiased; -moz-osx-font-smoothing: grayscale; font-family: system-ui, sans-serif; }
    .hidden { display: none; }
    .fade-in-up { animation: fade-in-up 0.5s ease-out forwards; }
    @keyframes fade-in-up {
      0% { opacity: 0; transform: translateY(20px); }
      100% { opacity: 1; transform: translateY(0); }
    }
    .option-item { cursor: pointer; }
"#;

/// Player state machine
///
/// Expects `AUTO_ADVANCE_DELAY_MS` to be defined before it and the quiz
/// payload in `#quiz-data`.
pub(crate) const PLAYER_SCRIPT: &str = r#"
(function () {
  'use strict';

  function escapeHtml(value) {
    return String(value)
      .replace(/&/g, '&amp;')
      .replace(/</g, '&lt;')
      .replace(/>/g, '&gt;')
      .replace(/"/g, '&quot;')
      .replace(/'/g, '&#39;');
  }

  function shuffle(items) {
    const result = items.slice();
    for (let i = result.length - 1; i > 0; i--) {
      const j = Math.floor(Math.random() * (i + 1));
      const tmp = result[i];
      result[i] = result[j];
      result[j] = tmp;
    }
    return result;
  }

  function sameSet(correct, selected) {
    if (correct.length !== selected.length) return false;
    return correct.every(function (i) { return selected.indexOf(i) !== -1; });
  }

  function formatTime(seconds) {
    const m = Math.floor(seconds / 60);
    const s = seconds % 60;
    return m + ':' + (s < 10 ? '0' : '') + s;
  }

  function start() {
    const dataEl = document.getElementById('quiz-data');
    if (!dataEl) {
      console.error('Quiz data not found!');
      return;
    }

    const quiz = JSON.parse(dataEl.textContent);
    const settings = quiz.settings;
    const playerView = document.getElementById('player-view');
    const resultsView = document.getElementById('results-view');

    const state = {
      phase: 'playing',
      questions: settings.shuffleQuestions ? shuffle(quiz.questions) : quiz.questions.slice(),
      currentIndex: 0,
      answers: {},
      timeRemaining: settings.timeLimit,
      timerId: null,
      generation: 0
    };

    function selectionFor(question) {
      return state.answers[question.id] || [];
    }

    function stopTimer() {
      if (state.timerId !== null) {
        clearInterval(state.timerId);
        state.timerId = null;
      }
    }

    function startTimer() {
      if (settings.timeLimit <= 0) return;
      state.timerId = setInterval(function () {
        if (state.phase !== 'playing') {
          stopTimer();
          return;
        }
        state.timeRemaining -= 1;
        const timerEl = document.getElementById('timer');
        if (timerEl) timerEl.textContent = formatTime(Math.max(state.timeRemaining, 0));
        if (state.timeRemaining <= 0) finish();
      }, 1000);
    }

    function renderHeader() {
      const total = state.questions.length;
      const position = state.currentIndex + 1;
      const timer = settings.timeLimit > 0
        ? `<div id="timer" class="text-lg font-mono bg-slate-200 dark:bg-slate-700 px-3 py-1 rounded-md">${formatTime(state.timeRemaining)}</div>`
        : '';
      return `
        <header class="mb-6">
          <div class="flex justify-between items-center mb-2">
            <h1 class="text-3xl font-bold text-slate-800 dark:text-slate-100">${escapeHtml(quiz.title)}</h1>
            ${timer}
          </div>
          <div class="w-full bg-slate-200 dark:bg-slate-700 rounded-full h-2.5">
            <div id="progress-bar" class="bg-sky-500 h-2.5 rounded-full transition-all duration-500" style="width: ${(position / total) * 100}%"></div>
          </div>
          <p class="text-right text-sm mt-1 text-slate-500 dark:text-slate-400">Question ${position} of ${total}</p>
        </header>`;
    }

    function renderQuestion() {
      const question = state.questions[state.currentIndex];
      const selection = selectionFor(question);
      const multiple = question.type === 'MULTIPLE';
      const isLast = state.currentIndex === state.questions.length - 1;

      const options = question.options.map(function (option, index) {
        const selected = selection.indexOf(index) !== -1;
        const ring = selected ? 'ring-2 ring-sky-500 bg-sky-100 dark:bg-sky-900/50' : '';
        const shape = multiple ? 'rounded-md' : 'rounded-full';
        const mark = selected
          ? '<svg class="w-4 h-4 text-white" fill="none" viewBox="0 0 24 24" stroke="currentColor"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="3" d="M5 13l4 4L19 7" /></svg>'
          : '';
        return `
          <div data-option-index="${index}" aria-checked="${selected}" class="option-item flex items-center p-4 rounded-lg border border-slate-200 dark:border-slate-700 transition-all duration-200 hover:bg-slate-100 dark:hover:bg-slate-700/50 ${ring}">
            <div class="w-6 h-6 ${shape} border-2 ${selected ? 'bg-sky-500 border-sky-500' : 'border-slate-300'} flex items-center justify-center mr-4 transition-colors">${mark}</div>
            <span class="text-lg">${escapeHtml(option)}</span>
          </div>`;
      }).join('');

      playerView.innerHTML = `
        ${renderHeader()}
        <div id="question-card" class="fade-in-up bg-white dark:bg-slate-800 p-8 rounded-2xl shadow-2xl">
          <h2 class="text-2xl font-semibold mb-6 leading-relaxed">${escapeHtml(question.text)}</h2>
          ${multiple ? '<p class="text-sm mb-4 text-slate-500 dark:text-slate-400">Select all that apply.</p>' : ''}
          <div class="space-y-4">${options}</div>
          <div class="mt-8 flex justify-between items-center">
            <button id="prev-btn" ${state.currentIndex === 0 ? 'disabled' : ''} class="px-6 py-2 border-2 border-slate-300 dark:border-slate-600 rounded-lg font-semibold disabled:opacity-50 disabled:cursor-not-allowed">Previous</button>
            <button id="next-btn" class="px-8 py-3 bg-sky-600 text-white rounded-lg font-semibold text-lg hover:bg-sky-700 shadow-lg">${isLast ? 'Finish' : 'Next'}</button>
          </div>
        </div>`;
    }

    function selectOption(optionIndex) {
      if (state.phase !== 'playing') return;
      const question = state.questions[state.currentIndex];
      if (optionIndex < 0 || optionIndex >= question.options.length) return;

      let selection = selectionFor(question).slice();
      if (question.type === 'MULTIPLE') {
        const at = selection.indexOf(optionIndex);
        if (at === -1) {
          selection.push(optionIndex);
        } else {
          selection.splice(at, 1);
        }
      } else {
        selection = [optionIndex];
      }
      state.answers[question.id] = selection;
      renderQuestion();

      if (question.type !== 'MULTIPLE') {
        const issued = state.generation;
        setTimeout(function () {
          if (state.phase === 'playing' && state.generation === issued) next();
        }, AUTO_ADVANCE_DELAY_MS);
      }
    }

    function next() {
      if (state.phase !== 'playing') return;
      state.generation += 1;
      if (state.currentIndex < state.questions.length - 1) {
        state.currentIndex += 1;
        renderQuestion();
      } else {
        finish();
      }
    }

    function previous() {
      if (state.phase !== 'playing' || state.currentIndex === 0) return;
      state.generation += 1;
      state.currentIndex -= 1;
      renderQuestion();
    }

    function finish() {
      if (state.phase === 'finished') return;
      state.phase = 'finished';
      state.generation += 1;
      stopTimer();
      playerView.classList.add('hidden');
      resultsView.classList.remove('hidden');
      renderResults();
    }

    function renderResults() {
      let correctCount = 0;
      const reviews = state.questions.map(function (question) {
        const selection = selectionFor(question);
        const isCorrect = sameSet(question.correctAnswers, selection);
        if (isCorrect) correctCount += 1;

        const options = question.options.map(function (option, index) {
          const correctOption = question.correctAnswers.indexOf(index) !== -1;
          const selected = selection.indexOf(index) !== -1;
          let tone = 'border-slate-200 dark:border-slate-700';
          let marker = '';
          if (correctOption) {
            tone = 'bg-green-100 dark:bg-green-900/50 border-green-500';
            marker = '<span class="review-marker correct ml-auto text-green-600">&#10003;</span>';
          } else if (selected) {
            tone = 'bg-red-100 dark:bg-red-900/50 border-red-500';
            marker = '<span class="review-marker wrong ml-auto text-red-600">&#10007;</span>';
          }
          return `<div class="flex items-start p-3 rounded-lg border-2 ${tone}"><span>${escapeHtml(option)}</span>${marker}</div>`;
        }).join('');

        const explanation = question.explanation
          ? `<div class="mt-4 p-3 bg-slate-100 dark:bg-slate-700/50 rounded-lg"><p class="text-sm"><span class="font-semibold">Explanation:</span> ${escapeHtml(question.explanation)}</p></div>`
          : '';

        return `
          <div class="bg-white dark:bg-slate-800 p-6 rounded-xl shadow-lg">
            <div class="flex justify-between items-start">
              <p class="text-lg font-semibold">${escapeHtml(question.text)}</p>
              <span class="text-sm font-bold px-3 py-1 rounded-full ${isCorrect ? 'text-green-500 bg-green-100 dark:bg-green-900/50' : 'text-red-500 bg-red-100 dark:bg-red-900/50'}">${isCorrect ? 'Correct' : 'Incorrect'}</span>
            </div>
            <div class="mt-4 space-y-3">${options}</div>
            ${explanation}
          </div>`;
      }).join('');

      const total = state.questions.length;
      const score = total > 0 ? Math.round((correctCount / total) * 100) : 0;
      const points = correctCount * settings.pointsPerQuestion;

      resultsView.innerHTML = `
        <div class="fade-in-up">
          <header class="text-center mb-8">
            <h1 class="text-5xl font-extrabold">Quiz Results</h1>
          </header>
          <div class="max-w-4xl mx-auto bg-white dark:bg-slate-800 p-8 rounded-2xl shadow-2xl mb-8">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8 text-center">
              <div class="flex flex-col items-center justify-center p-4 rounded-lg bg-slate-100 dark:bg-slate-700">
                <p class="text-sm uppercase font-semibold">Score</p>
                <p id="score-percent" class="text-5xl font-bold text-sky-500">${score}<span class="text-3xl">%</span></p>
                <p id="score-points" class="text-sm mt-1">${points} points</p>
              </div>
              <div class="flex flex-col items-center justify-center p-4 rounded-lg bg-slate-100 dark:bg-slate-700">
                <p class="text-sm uppercase font-semibold">Correct Answers</p>
                <p id="score-count" class="text-5xl font-bold text-green-500">${correctCount} / ${total}</p>
              </div>
            </div>
          </div>
          <div class="mt-10 flex justify-center gap-4">
            <button id="retry-btn" class="px-8 py-3 bg-sky-600 text-white rounded-lg font-semibold text-lg hover:bg-sky-700">Retry Quiz</button>
          </div>
          <div class="mt-12 max-w-4xl mx-auto">
            <h2 class="text-3xl font-bold text-center mb-6">Review Your Answers</h2>
            <div class="space-y-6">${reviews}</div>
          </div>
        </div>`;
    }

    playerView.addEventListener('click', function (event) {
      const target = event.target;
      const option = target.closest('[data-option-index]');
      if (option) {
        selectOption(parseInt(option.getAttribute('data-option-index'), 10));
      } else if (target.closest('#next-btn')) {
        next();
      } else if (target.closest('#prev-btn')) {
        previous();
      }
    });

    resultsView.addEventListener('click', function (event) {
      if (event.target.closest('#retry-btn')) location.reload();
    });

    if (state.questions.length === 0) {
      finish();
      return;
    }
    renderQuestion();
    startTimer();
  }

  if (document.readyState === 'loading') {
    document.addEventListener('DOMContentLoaded', start);
  } else {
    start();
  }
})();
"#;
